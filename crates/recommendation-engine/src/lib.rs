pub mod assembler;
pub mod catalog;
pub mod export;
pub mod industry;
pub mod market;
pub mod rules;

use shared_types::{Recommendation, RecommendationRequest};

/// RecommendationEngine entry point
pub struct RecommendationEngine {
    catalog: &'static catalog::Catalog,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            catalog: catalog::catalog(),
        }
    }

    /// Compute the tiered recommendation for one request. Total: never
    /// fails, never returns an error.
    pub fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        assembler::assemble(self.catalog, request)
    }

    /// The catalog backing this engine
    pub fn catalog(&self) -> &catalog::Catalog {
        self.catalog
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Channel, Needs, Scale};
    use std::collections::HashSet;

    fn request(industry: &str, channel: Channel, scale: Scale, needs: Needs) -> RecommendationRequest {
        RecommendationRequest {
            industry: industry.to_string(),
            channel,
            scale,
            needs,
        }
    }

    #[test]
    fn test_no_duplication_across_tiers() {
        let engine = RecommendationEngine::new();
        let req = request(
            "e-commerce",
            Channel::App,
            Scale::VeryHigh,
            Needs {
                recurring_billing: true,
                emi_or_bnpl: true,
                payouts: true,
                offers: true,
                orchestration: true,
            },
        );
        let rec = engine.recommend(&req);

        let mut seen = HashSet::new();
        for record in rec.must_have.iter().chain(&rec.good_to_have) {
            assert!(seen.insert(record.name.clone()), "{} twice", record.name);
        }
    }

    #[test]
    fn test_seed_inclusion() {
        // Every resolvable seed name survives into the result; rules only
        // add, never remove.
        let engine = RecommendationEngine::new();
        for industry in industry::Industry::all() {
            let Some(defaults) = industry.defaults() else {
                continue;
            };
            let rec = engine.recommend(&request(
                industry.name(),
                Channel::Both,
                Scale::Low,
                Needs::default(),
            ));
            let must: Vec<_> = rec.must_have.iter().map(|r| r.name.as_str()).collect();
            for name in defaults.must {
                assert!(must.contains(name), "{} lost seed {}", industry, name);
            }
        }
    }

    #[test]
    fn test_need_gated_addition() {
        let engine = RecommendationEngine::new();
        let without = engine.recommend(&request("NBFC", Channel::Web, Scale::Low, Needs::default()));
        let with = engine.recommend(&request(
            "NBFC",
            Channel::Web,
            Scale::Low,
            Needs {
                payouts: true,
                ..Needs::default()
            },
        ));

        assert!(!without.must_have.iter().any(|r| r.name == "Payouts"));
        assert_eq!(
            with.must_have.iter().filter(|r| r.name == "Payouts").count(),
            1
        );
    }

    #[test]
    fn test_all_industries_yield_nonempty_plans() {
        let engine = RecommendationEngine::new();
        for industry in industry::Industry::all() {
            let rec = engine.recommend(&request(
                industry.name(),
                Channel::Both,
                Scale::Low,
                Needs::default(),
            ));
            assert!(!rec.is_empty(), "{} produced an empty plan", industry);
        }
    }

    #[test]
    fn test_rules_never_retier_seeded_products() {
        // Travel seeds Retry into good; the orchestration trigger must not
        // move or duplicate it.
        let engine = RecommendationEngine::new();
        let rec = engine.recommend(&request(
            "Travel",
            Channel::Both,
            Scale::VeryHigh,
            Needs::default(),
        ));
        assert!(!rec.must_have.iter().any(|r| r.name == "Retry"));
        assert_eq!(
            rec.good_to_have.iter().filter(|r| r.name == "Retry").count(),
            1
        );
    }
}
