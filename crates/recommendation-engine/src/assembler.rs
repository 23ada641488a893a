//! Recommendation assembly
//!
//! Seeds the two tiers from the industry defaults, then runs the rule
//! passes in a fixed order. Every append checks the union of both tiers
//! first: once a product is recommended at any tier it is never duplicated
//! or re-tiered (first assignment wins).

use shared_types::{ProductRecord, Recommendation, RecommendationRequest, Tier};

use crate::catalog::Catalog;
use crate::industry::{Industry, FALLBACK_DEFAULT};
use crate::rules;

/// Mutable draft of the two tiers while rules run
pub struct Assembly<'a> {
    catalog: &'a Catalog,
    must: Vec<ProductRecord>,
    good: Vec<ProductRecord>,
}

impl<'a> Assembly<'a> {
    fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            must: Vec::new(),
            good: Vec::new(),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.must.iter().chain(&self.good).any(|r| r.name == name)
    }

    /// Append the named product to a tier unless it is already present in
    /// either tier. Names the catalog cannot resolve are skipped.
    pub fn push(&mut self, tier: Tier, name: &str) {
        if self.contains(name) {
            return;
        }
        match self.catalog.lookup(name) {
            Some(record) => match tier {
                Tier::MustHave => self.must.push(record.clone()),
                Tier::GoodToHave => self.good.push(record.clone()),
            },
            None => {
                tracing::debug!(product = name, "skipping unresolvable catalog name");
            }
        }
    }

    fn into_recommendation(self) -> Recommendation {
        Recommendation {
            must_have: self.must,
            good_to_have: self.good,
            generated_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

/// Compute the full recommendation for one request. Total: unknown
/// industries seed from the fallback pair, unresolvable names are elided,
/// and no input can make this fail.
pub fn assemble(catalog: &Catalog, request: &RecommendationRequest) -> Recommendation {
    let mut assembly = Assembly::new(catalog);

    seed_industry_defaults(&request.industry, &mut assembly);

    rules::needs::apply_need_rules(&request.needs, &mut assembly);
    rules::orchestration::apply_orchestration_rule(&request.needs, request.scale, &mut assembly);
    rules::channel::apply_channel_rules(request.channel, &mut assembly);

    assembly.into_recommendation()
}

fn seed_industry_defaults(industry: &str, assembly: &mut Assembly) {
    let defaults = Industry::parse_code(industry)
        .and_then(|i| i.defaults())
        .unwrap_or(&FALLBACK_DEFAULT);

    for name in defaults.must {
        assembly.push(Tier::MustHave, name);
    }
    for name in defaults.good {
        assembly.push(Tier::GoodToHave, name);
    }
}
