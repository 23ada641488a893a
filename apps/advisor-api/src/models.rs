//! Response models for the advisor API
//!
//! The request side is `shared_types::RecommendationRequest`, deserialized
//! straight from the JSON body.

use recommendation_engine::market::MarketStat;
use serde::Serialize;
use shared_types::{ProductRecord, Recommendation};

/// One entry of the industry dropdown
#[derive(Debug, Clone, Serialize)]
pub struct IndustryEntry {
    pub label: String,
    /// Whether this category carries a hand-authored seed (false means the
    /// fallback pair applies)
    pub seeded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustriesResponse {
    pub industries: Vec<IndustryEntry>,
}

/// Full catalog browse: products first, then add-ons
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductRecord>,
    pub addons: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketResponse {
    pub fiscal_years: &'static [&'static str],
    pub stats: &'static [MarketStat],
    pub trends: &'static [&'static str],
}

/// Tiered plan plus an explicit empty marker so clients can render the
/// "no recommendations" state without inspecting both lists
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub empty: bool,
    #[serde(flatten)]
    pub plan: Recommendation,
}
