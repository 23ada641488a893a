//! Feature add-on catalog
//!
//! Add-ons carry a "when to use" blurb instead of a feature list, so
//! `features` stays `None` and the usage context lands in `integration`.

use shared_types::ProductRecord;

fn addon(
    name: &str,
    rationale: &str,
    when_to_use: &str,
    api_operations: &[&str],
    api_rationale: &str,
    docs_link: &str,
) -> ProductRecord {
    ProductRecord {
        name: name.to_string(),
        rationale: rationale.to_string(),
        integration: when_to_use.to_string(),
        api_operations: api_operations.iter().map(|s| s.to_string()).collect(),
        api_rationale: api_rationale.to_string(),
        features: None,
        docs_link: Some(docs_link.to_string()),
        demo_link: Some("(see docs)".to_string()),
    }
}

/// The feature add-ons, in catalog order
pub fn feature_addons() -> Vec<ProductRecord> {
    vec![
        addon(
            "Quick Pay",
            "Lightning-fast repeat payments with pre-filled details — fewer taps, higher conversion.",
            "Best for returning users in e-commerce, ticketing, food tech.",
            &["initiatePayment (prefilled)", "authorizePayment"],
            "Skip re-entering info; jump straight to pay securely.",
            "https://juspay.io/in/docs/quickpay-integration/docs/quick-pay/overview",
        ),
        addon(
            "Retry",
            "Auto-recover failed payments by retrying intelligent paths — boosts success rates.",
            "High traffic or high failure scenarios; anytime approval rate matters.",
            &["retryPayment", "getRetryOptions"],
            "If one path fails, try a better one automatically.",
            "https://juspay.io/in/docs/retry/docs/retry/overview",
        ),
        addon(
            "UPI Autopay",
            "Set-and-forget recurring UPI payments with customer mandates.",
            "SaaS, insurance premia, subscriptions, savings plans.",
            &["createMandate", "debitMandate", "cancelMandate"],
            "Create the rule once; charges happen on schedule with alerts.",
            "https://juspay.io/in/docs/upi-autopay/docs/upi-autopay/overview",
        ),
        addon(
            "Payment Locking",
            "Prevent duplicate charges or double-click payments in high-traffic checkouts.",
            "Flash sales, ticketing drops, high concurrency.",
            &["lockPayment", "releaseLock"],
            "Reserve a spot for a payment so it isn't created twice.",
            "https://juspay.io/in/docs/payment-locking/docs/payment-locking/overview",
        ),
        addon(
            "Outages",
            "Gracefully handle bank/PSP downtime with live signals and routing.",
            "Always-on; mission-critical checkout.",
            &["getOutageStatus", "pauseRoute", "resumeRoute"],
            "If a road is closed, take a detour automatically.",
            "https://juspay.io/in/docs/outages/docs/outages/overview",
        ),
        addon(
            "UPI Intent on mWeb",
            "Open UPI apps from mobile web for higher success vs. QR/Collect only.",
            "Merchants with mobile web flows.",
            &["initiatePayment (intent)", "checkPaymentStatus"],
            "Tap a button, jump to the UPI app, return with status.",
            "https://juspay.io/in/docs/mweb-intent/docs/upi-intent-on-mweb/overview",
        ),
        addon(
            "Scan & Pay",
            "Let customers pay by scanning a dynamic/static UPI QR.",
            "In-store, COD, deliveries, kiosks.",
            &["createQR", "checkPaymentStatus", "closeQR"],
            "Show a code, customer scans, confirm payment received.",
            "https://juspay.io/in/docs/upi-qr-code/docs/scan--pay/overview",
        ),
        addon(
            "Card Mandates",
            "Recurring card payments using RBI-compliant mandates.",
            "Subscriptions where cards are preferred.",
            &["setupCardMandate", "chargeMandate", "cancelMandate"],
            "Create a permission once, then charge within allowed rules.",
            "http://juspay.io/in/docs/card-mandates/docs/card-mandate/overview",
        ),
        addon(
            "eNACH",
            "Bank account mandates for recurring debits — great for NBFCs/insurers.",
            "Loans, SIPs, insurance premia.",
            &["createENachMandate", "debitENach", "cancelENach"],
            "Customer authorises bank; collections run automatically.",
            "https://juspay.io/in/docs/enach/docs/enach/overview",
        ),
        addon(
            "TPV",
            "Third-Party Validation for bank-mapped payments — reduce wrong credits.",
            "Billpay, utilities, wallets.",
            &["validateAccount", "linkTPVReference"],
            "Check the account before accepting money.",
            "https://juspay.io/in/docs/tpv/docs/third-party-validation/overview",
        ),
        addon(
            "Simpl Paylater",
            "Offer Buy-Now-Pay-Later via Simpl — lift AOV and conversion.",
            "E-commerce, D2C, ticketing.",
            &["startBNPL", "captureBNPL"],
            "Let customers pay later while you get paid now.",
            "https://juspay.io/in/docs/simpl/docs/simpl-paylater/overview",
        ),
        addon(
            "Simpl Pay-in-3",
            "Split bills into 3 payments — friendly instalments.",
            "High-value carts.",
            &["startBNPL", "captureBNPL"],
            "Break the payment into smaller bites.",
            "https://juspay.io/in/docs/simpl-pay-in-3/docs/simpl-payin3/overview",
        ),
        addon(
            "Amazon Pay Balance",
            "Wallet option with strong customer trust.",
            "Wider choice at checkout.",
            &["initiateWalletPay", "verifyWalletPay"],
            "Pay using stored wallet balance.",
            "https://juspay.io/in/docs/amazonpay/docs/amazon-pay-balance/overview",
        ),
        addon(
            "Juspay Native OTP",
            "Faster OTP auto-read and autofill in app — fewer drop-offs.",
            "Android/iOS apps using cards/EMI.",
            &["initiateOtp", "verifyOtp"],
            "Read/submit OTP smoothly without friction.",
            "https://juspay.io/in/docs/dotp-v2/docs/native-otp/overview",
        ),
        addon(
            "CVV Less Payments",
            "Reduce steps by skipping CVV on eligible tokenised cards.",
            "Returning users with tokens.",
            &["chargeTokenizedCard (cvvless)", "riskCheck"],
            "Use safe tokens and risk rules to skip typing CVV.",
            "https://juspay.io/in/docs/cvv-less/docs/cvv-less-payments/overview",
        ),
        addon(
            "Tap & Pay",
            "Contactless in-person card payments via NFC — very fast.",
            "In-store, delivery, events.",
            &["initiateNFC", "captureNFC"],
            "Tap the card/phone and capture the payment.",
            "https://juspay.io/in/docs/nfc/docs/tap--pay/overview",
        ),
        addon(
            "O2P with Passkeys",
            "One-to-Pay (Click to Pay) with passkeys for passwordless auth.",
            "Card heavy merchants wanting fast SCA.",
            &["createPasskey", "authenticatePasskey"],
            "Use device credentials instead of passwords.",
            "https://juspay.io/in/docs/clicktopay/docs/clicktopay-with-passkeys/overview",
        ),
        addon(
            "Offers Engine",
            "Run granular promos (banks, cards, SKUs) without dev churn.",
            "Seasonal sales, issuer tie-ups.",
            &["applyOffer", "validateOffer"],
            "Check eligibility and apply savings in real time.",
            "https://juspay.io/in/docs/offer-engine/docs/offer-engine/overview",
        ),
        addon(
            "Standard EMI Suite",
            "Let customers split via issuer EMIs — boosts affordability.",
            "High-value carts across categories.",
            &["showEmiOptions", "convertToEmi"],
            "Expose EMI options, convert the charge into instalments.",
            "https://juspay.io/in/docs/emi/docs/standard-emi-suite/overview",
        ),
        addon(
            "Advance EMI Suite",
            "Advanced issuer & cardless EMI flows.",
            "Broader EMI coverage and promos.",
            &["showEmiOptions", "convertToEmi"],
            "Offer richer EMI plans during checkout.",
            "https://juspay.io/in/docs/advance-emi/docs/advance-emi-suite/overview",
        ),
        addon(
            "Payment Links",
            "Collect payments without a website/app — share a link.",
            "Inside chats, emails, invoices.",
            &["createPaymentLink", "cancelPaymentLink"],
            "Generate a pay page and track completion.",
            "https://juspay.io/in/docs/payment-links/docs/payment-links/overview",
        ),
        addon(
            "Split Settlements",
            "Split a single payment to multiple parties — great for marketplaces.",
            "Multi-seller platforms, commissions, affiliates.",
            &["createSplit", "settleSplit", "reverseSplit"],
            "Route shares to the right parties automatically.",
            "https://juspay.io/in/docs/split-settlements/docs/split-settlements/overview",
        ),
        addon(
            "Merchant's In-house Wallet",
            "Offer your own stored-value wallet for faster repeat purchases.",
            "Loyalty ecosystems, refunds, micro-purchases.",
            &["createWallet", "creditWallet", "debitWallet"],
            "Top-up and spend within your brand's wallet.",
            "https://juspay.io/in/docs/merchant-container/docs/merchants-inhouse-wallet/overview",
        ),
        addon(
            "Part Payment",
            "Allow customers to pay a portion now and the rest later.",
            "Pre-orders, bookings, deposits.",
            &["createPartPayment", "collectBalance"],
            "Take a token amount first, then the remainder.",
            "https://juspay.io/in/docs/part-payments/docs/overview/description",
        ),
    ]
}
