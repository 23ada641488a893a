//! Business category enumeration and per-industry seed tables
//!
//! Five industries carry hand-authored must-have/good-to-have seeds; every
//! other category (and any label the form sends that we don't recognize)
//! falls back to `FALLBACK_DEFAULT`.

use serde::{Deserialize, Serialize};

/// Business categories offered on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Ecommerce,
    HyperLocal,
    Billpay,
    Travel,
    Bfsi,
    ERetail,
    Telecom,
    AgriTech,
    Nbfc,
    EPharma,
    StockBroking,
    Insurance,
    Ticketing,
    Ott,
    Classified,
    FintechInsurtech,
    FoodTech,
    MediaTelecomOtt,
    Hospitality,
    EdTech,
    Other,
}

/// Baseline recommendation for one industry: ordered product-name lists.
/// Names that fail catalog lookup are skipped at assembly time.
pub struct IndustryDefault {
    pub must: &'static [&'static str],
    pub good: &'static [&'static str],
}

/// Seed for industries without a hand-authored table, and for labels
/// outside the enumerated set
pub const FALLBACK_DEFAULT: IndustryDefault = IndustryDefault {
    must: &["UPI"],
    good: &["Payment Orchestration"],
};

const ECOMMERCE_DEFAULT: IndustryDefault = IndustryDefault {
    must: &["UPI", "Cards with Tokenization", "Refunds"],
    good: &[
        "Payment Orchestration",
        "Offers & Discounts",
        "Quick Pay",
        "Retry",
        "UPI Intent on mWeb",
    ],
};

const BFSI_DEFAULT: IndustryDefault = IndustryDefault {
    must: &["UPI", "Payment Links", "TPV"],
    good: &["Subscriptions", "eNACH", "Split Settlements", "UPI Autopay"],
};

const TRAVEL_DEFAULT: IndustryDefault = IndustryDefault {
    must: &["UPI", "Cards with Tokenization", "Refunds"],
    good: &["Split Settlements", "Quick Pay", "Retry", "Offers & Discounts"],
};

const NBFC_DEFAULT: IndustryDefault = IndustryDefault {
    must: &["eNACH", "UPI Autopay", "TPV"],
    good: &["Payment Links", "Part Payment", "Merchant's In-house Wallet"],
};

const INSURANCE_DEFAULT: IndustryDefault = IndustryDefault {
    must: &["UPI Autopay", "eNACH", "Subscriptions"],
    good: &["Payment Links", "TPV", "Offers Engine"],
};

impl Industry {
    /// Get the form label for this category
    pub fn name(&self) -> &'static str {
        match self {
            Industry::Ecommerce => "e-commerce",
            Industry::HyperLocal => "Hyper Local",
            Industry::Billpay => "Billpay",
            Industry::Travel => "Travel",
            Industry::Bfsi => "BFSI",
            Industry::ERetail => "E-Retail",
            Industry::Telecom => "Telecom",
            Industry::AgriTech => "AgriTech",
            Industry::Nbfc => "NBFC",
            Industry::EPharma => "E-Pharma",
            Industry::StockBroking => "Stock Broking",
            Industry::Insurance => "Insurance",
            Industry::Ticketing => "Ticketing",
            Industry::Ott => "OTT",
            Industry::Classified => "Classified",
            Industry::FintechInsurtech => "FinTech / InsurTech",
            Industry::FoodTech => "Food Tech",
            Industry::MediaTelecomOtt => "Media / Telecom / OTT",
            Industry::Hospitality => "Hospitality",
            Industry::EdTech => "EdTech",
            Industry::Other => "Other",
        }
    }

    /// Hand-authored seed for this industry, if one exists
    pub fn defaults(&self) -> Option<&'static IndustryDefault> {
        match self {
            Industry::Ecommerce => Some(&ECOMMERCE_DEFAULT),
            Industry::Bfsi => Some(&BFSI_DEFAULT),
            Industry::Travel => Some(&TRAVEL_DEFAULT),
            Industry::Nbfc => Some(&NBFC_DEFAULT),
            Industry::Insurance => Some(&INSURANCE_DEFAULT),
            _ => None,
        }
    }

    /// Check whether this category has a hand-authored seed
    pub fn has_defaults(&self) -> bool {
        self.defaults().is_some()
    }

    /// Parse from a form label (case-insensitive). The legacy "Hyperlocal"
    /// spelling collapses into `HyperLocal`.
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "e-commerce" | "ecommerce" => Some(Industry::Ecommerce),
            "hyper local" | "hyperlocal" => Some(Industry::HyperLocal),
            "billpay" => Some(Industry::Billpay),
            "travel" => Some(Industry::Travel),
            "bfsi" => Some(Industry::Bfsi),
            "e-retail" => Some(Industry::ERetail),
            "telecom" | "telcomm" => Some(Industry::Telecom),
            "agritech" => Some(Industry::AgriTech),
            "nbfc" => Some(Industry::Nbfc),
            "e-pharma" => Some(Industry::EPharma),
            "stock broking" => Some(Industry::StockBroking),
            "insurance" => Some(Industry::Insurance),
            "ticketing" => Some(Industry::Ticketing),
            "ott" => Some(Industry::Ott),
            "classified" => Some(Industry::Classified),
            "fintech / insurtech" | "fintech/insurtech" => Some(Industry::FintechInsurtech),
            "food tech" | "foodtech" => Some(Industry::FoodTech),
            "media / telecom / ott" => Some(Industry::MediaTelecomOtt),
            "hospitality" => Some(Industry::Hospitality),
            "edtech" => Some(Industry::EdTech),
            "other" => Some(Industry::Other),
            _ => None,
        }
    }

    /// All categories in form order
    pub fn all() -> Vec<Self> {
        vec![
            Industry::Ecommerce,
            Industry::HyperLocal,
            Industry::Billpay,
            Industry::Travel,
            Industry::Bfsi,
            Industry::ERetail,
            Industry::Telecom,
            Industry::AgriTech,
            Industry::Nbfc,
            Industry::EPharma,
            Industry::StockBroking,
            Industry::Insurance,
            Industry::Ticketing,
            Industry::Ott,
            Industry::Classified,
            Industry::FintechInsurtech,
            Industry::FoodTech,
            Industry::MediaTelecomOtt,
            Industry::Hospitality,
            Industry::EdTech,
            Industry::Other,
        ]
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
