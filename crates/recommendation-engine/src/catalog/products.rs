//! Core payment method catalog

use shared_types::ProductRecord;

fn product(
    name: &str,
    rationale: &str,
    integration: &str,
    api_operations: &[&str],
    api_rationale: &str,
    features: &str,
    docs_link: &str,
) -> ProductRecord {
    ProductRecord {
        name: name.to_string(),
        rationale: rationale.to_string(),
        integration: integration.to_string(),
        api_operations: api_operations.iter().map(|s| s.to_string()).collect(),
        api_rationale: api_rationale.to_string(),
        features: Some(features.to_string()),
        docs_link: Some(docs_link.to_string()),
        demo_link: None,
    }
}

/// The core payment methods, in catalog order
pub fn core_products() -> Vec<ProductRecord> {
    vec![
        product(
            "UPI",
            "Instant bank-to-bank payments, huge adoption, 24/7 — boosts success and customer preference.",
            "Use Express Checkout to start a UPI payment (Intent/Collect) and poll for status.",
            &["initiatePayment", "checkPaymentStatus", "retryPayment (optional)"],
            "Ask for money, check if paid, try again if needed. Like ringing the bell, then opening the door.",
            "UPI Intent & Collect, deep link, PSP coverage, auto-retries, success optimization.",
            "https://juspay.io/in/docs/api-reference/docs/express-checkout/introduction",
        ),
        product(
            "Cards with Tokenization",
            "Save cards safely for one-click checkout (RBI compliant). Lifts conversion and reduces friction.",
            "Integrate Juspay Safe to tokenise and charge tokens.",
            &["tokenizeCard", "chargeTokenizedCard", "deleteCardToken"],
            "Give the card a safe nickname (token) and charge the nickname — real number stays hidden.",
            "Visa/Mastercard/RuPay tokens, one-click pay, better approvals.",
            "https://juspay.io/in/docs/resources/docs/card-network-tokenization/tokenization--express-checkout-card-vault-merchants",
        ),
        product(
            "Subscriptions",
            "Automates repeat billing for SaaS/OTT/insurance — predictable revenue, less manual work.",
            "Create/manage mandates; charge on schedule (UPI Autopay, eNACH, Cards).",
            &["createMandate", "debitMandate", "cancelMandate", "getMandateStatus"],
            "Set the rule, run the charge, cancel/track when needed. Like a standing order.",
            "UPI Autopay, eNACH, card mandates, reminders/pre-debit alerts.",
            "https://juspay.io/in/docs/api-reference/docs/express-checkout/introduction",
        ),
        product(
            "Refunds",
            "Fast refunds build trust and reduce support tickets.",
            "Trigger refund API when order is cancelled/returned; track status.",
            &["refundOrder", "checkRefundStatus"],
            "Send money back and verify it reached the customer.",
            "Full/partial refunds, notifications, status tracking.",
            "https://juspay.io/in/docs/api-reference/docs/express-checkout/refund-order-api",
        ),
        product(
            "Payment Orchestration",
            "Auto-route via the best acquirer/PSP to reduce failures and lift approval rates.",
            "Configure rules and fallbacks in the orchestration layer.",
            &["routeTransaction", "retryTransaction", "getRouteMetrics"],
            "Pick the fastest checkout lane; switch and retry if a lane is slow.",
            "Multi-gateway routing, smart retries, data-driven rules.",
            "https://juspay.io/in/docs/api-reference/docs/express-checkout/introduction",
        ),
        product(
            "Offers & Discounts",
            "Delight customers and drive conversion with coupons, bank offers, EMI offers.",
            "Configure offers in dashboard; validate/apply at checkout.",
            &["applyOffer", "validateOffer"],
            "Like scanning a coupon at the counter — apply only when eligible.",
            "Promo codes, issuer offers, instant discounts/cashback.",
            "https://juspay.io/in/docs/api-reference/docs/express-checkout/introduction",
        ),
        product(
            "Payouts",
            "Send money to vendors/partners/customers instantly — great for marketplaces and credits.",
            "Create payout, track status, reconcile.",
            &["createPayout", "checkPayoutStatus", "listPayouts"],
            "Schedule a transfer and track delivery — like a reliable courier.",
            "Bulk payouts, UPI/IMPS/NEFT, near-instant settlements.",
            "https://juspay.io/in/docs/api-reference/docs/express-checkout/introduction",
        ),
    ]
}
