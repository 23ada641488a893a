//! Need-flag rules (recurring billing, EMI/BNPL, payouts, offers)

use shared_types::{Needs, Tier};

use crate::assembler::Assembly;

/// Products that cover recurring collection, in recommendation order
pub const RECURRING_BILLING_STACK: &[&str] =
    &["Subscriptions", "UPI Autopay", "eNACH", "Card Mandates"];

/// Instalment products, in recommendation order
pub const EMI_BNPL_STACK: &[&str] = &[
    "Standard EMI Suite",
    "Advance EMI Suite",
    "Simpl Paylater",
    "Simpl Pay-in-3",
];

pub const PAYOUTS_PRODUCT: &str = "Payouts";
pub const OFFERS_PRODUCT: &str = "Offers & Discounts";

/// Apply the four need-flag rules in their fixed order
pub fn apply_need_rules(needs: &Needs, assembly: &mut Assembly) {
    if needs.recurring_billing {
        for name in RECURRING_BILLING_STACK {
            assembly.push(Tier::MustHave, name);
        }
    }
    if needs.emi_or_bnpl {
        for name in EMI_BNPL_STACK {
            assembly.push(Tier::GoodToHave, name);
        }
    }
    if needs.payouts {
        assembly.push(Tier::MustHave, PAYOUTS_PRODUCT);
    }
    if needs.offers {
        assembly.push(Tier::GoodToHave, OFFERS_PRODUCT);
    }
}
