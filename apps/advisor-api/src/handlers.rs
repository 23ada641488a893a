//! HTTP handlers for the advisor API

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use recommendation_engine::market::{market_stats, payment_trends, FISCAL_YEARS};
use recommendation_engine::{export, industry::Industry};
use shared_types::RecommendationRequest;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// List the business categories for the intake form
pub async fn list_industries() -> Json<IndustriesResponse> {
    let industries = Industry::all()
        .into_iter()
        .map(|i| IndustryEntry {
            label: i.name().to_string(),
            seeded: i.has_defaults(),
        })
        .collect();

    Json(IndustriesResponse { industries })
}

/// Browse the full catalog, products then add-ons
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let catalog = state.engine.catalog();
    Json(CatalogResponse {
        products: catalog.products().to_vec(),
        addons: catalog.addons().to_vec(),
    })
}

/// Educational market data: GMV/volume series and trends
pub async fn get_market() -> Json<MarketResponse> {
    Json(MarketResponse {
        fiscal_years: FISCAL_YEARS,
        stats: market_stats(),
        trends: payment_trends(),
    })
}

/// Compute the tiered recommendation for a questionnaire submission
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendationRequest>,
) -> Json<RecommendResponse> {
    let plan = state.engine.recommend(&req);

    tracing::info!(
        "Assembled plan for industry {}: {} must-have, {} good-to-have",
        req.industry,
        plan.must_have.len(),
        plan.good_to_have.len()
    );

    Json(RecommendResponse {
        empty: plan.is_empty(),
        plan,
    })
}

/// Compute the recommendation and return it as a CSV download
pub async fn export_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendationRequest>,
) -> Result<(StatusCode, [(String, String); 2], String), ApiError> {
    let plan = state.engine.recommend(&req);
    let csv = export::plan_to_csv(&plan)?;

    tracing::info!(
        "Exported plan for industry {}: {} rows",
        req.industry,
        plan.must_have.len() + plan.good_to_have.len()
    );

    Ok((
        StatusCode::OK,
        [
            (
                "Content-Type".to_string(),
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                "Content-Disposition".to_string(),
                "attachment; filename=\"payment_plan.csv\"".to_string(),
            ),
        ],
        csv,
    ))
}
