//! Property-based tests for advisor-api
//!
//! Exercises the recommendation invariants and the CSV export over
//! arbitrary questionnaire submissions using proptest.

use proptest::prelude::*;
use std::collections::HashSet;

use recommendation_engine::{export, RecommendationEngine};
use shared_types::{Channel, Needs, RecommendationRequest, Scale, Tier};

// ============================================================
// Strategies
// ============================================================

/// Industries with a hand-authored seed plus a few unseeded categories
fn known_industry() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("e-commerce".to_string()),
        Just("BFSI".to_string()),
        Just("Travel".to_string()),
        Just("NBFC".to_string()),
        Just("Insurance".to_string()),
        Just("EdTech".to_string()),
        Just("Stock Broking".to_string()),
    ]
}

/// Any industry label, including ones outside the enumerated set
fn any_industry() -> impl Strategy<Value = String> {
    prop_oneof![known_industry(), "[A-Za-z][A-Za-z ]{0,30}"]
}

fn any_channel() -> impl Strategy<Value = Channel> {
    prop_oneof![Just(Channel::App), Just(Channel::Web), Just(Channel::Both)]
}

fn any_scale() -> impl Strategy<Value = Scale> {
    prop_oneof![
        Just(Scale::Low),
        Just(Scale::Mid),
        Just(Scale::High),
        Just(Scale::VeryHigh),
    ]
}

fn any_needs() -> impl Strategy<Value = Needs> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(recurring_billing, emi_or_bnpl, payouts, offers, orchestration)| Needs {
                recurring_billing,
                emi_or_bnpl,
                payouts,
                offers,
                orchestration,
            },
        )
}

fn any_request() -> impl Strategy<Value = RecommendationRequest> {
    (any_industry(), any_channel(), any_scale(), any_needs()).prop_map(
        |(industry, channel, scale, needs)| RecommendationRequest {
            industry,
            channel,
            scale,
            needs,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Assembly Invariants
    // ============================================================

    #[test]
    fn no_name_appears_twice_across_tiers(req in any_request()) {
        let plan = RecommendationEngine::new().recommend(&req);

        let mut seen = HashSet::new();
        for record in plan.must_have.iter().chain(&plan.good_to_have) {
            prop_assert!(seen.insert(record.name.clone()), "{} recommended twice", record.name);
        }
    }

    #[test]
    fn assembly_is_deterministic(req in any_request()) {
        let engine = RecommendationEngine::new();
        let a = engine.recommend(&req);
        let b = engine.recommend(&req);

        let names = |plan: &shared_types::Recommendation| -> (Vec<String>, Vec<String>) {
            (
                plan.must_have.iter().map(|r| r.name.clone()).collect(),
                plan.good_to_have.iter().map(|r| r.name.clone()).collect(),
            )
        };
        prop_assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn every_request_yields_at_least_one_must_have(req in any_request()) {
        // Every seed (fallback included) resolves at least UPI or an
        // equivalent into the must tier, and no rule removes entries.
        let plan = RecommendationEngine::new().recommend(&req);
        prop_assert!(!plan.must_have.is_empty());
    }

    #[test]
    fn payouts_need_always_lands_once(req in any_request()) {
        let mut req = req;
        req.needs.payouts = true;
        let plan = RecommendationEngine::new().recommend(&req);

        let in_must = plan.must_have.iter().filter(|r| r.name == "Payouts").count();
        let in_good = plan.good_to_have.iter().filter(|r| r.name == "Payouts").count();
        prop_assert_eq!(in_must + in_good, 1);
    }

    #[test]
    fn app_channel_always_recommends_native_otp(
        industry in any_industry(),
        scale in any_scale(),
        needs in any_needs()
    ) {
        let req = RecommendationRequest {
            industry,
            channel: Channel::App,
            scale,
            needs,
        };
        let plan = RecommendationEngine::new().recommend(&req);
        let present = plan
            .must_have
            .iter()
            .chain(&plan.good_to_have)
            .any(|r| r.name == "Juspay Native OTP");
        prop_assert!(present);
    }

    #[test]
    fn raising_scale_never_shrinks_the_good_tier(
        industry in any_industry(),
        channel in any_channel(),
        needs in any_needs()
    ) {
        let engine = RecommendationEngine::new();
        let at = |scale: Scale| {
            let req = RecommendationRequest {
                industry: industry.clone(),
                channel,
                scale,
                needs,
            };
            engine
                .recommend(&req)
                .good_to_have
                .iter()
                .map(|r| r.name.clone())
                .collect::<Vec<_>>()
        };

        let low = at(Scale::Low);
        let very_high = at(Scale::VeryHigh);
        for name in &low {
            prop_assert!(very_high.contains(name), "{} lost at higher scale", name);
        }
    }

    // ============================================================
    // CSV Export
    // ============================================================

    #[test]
    fn csv_round_trip_recovers_tier_name_pairs(req in any_request()) {
        let plan = RecommendationEngine::new().recommend(&req);

        let csv = export::plan_to_csv(&plan).unwrap();
        let pairs = export::read_plan_csv(&csv).unwrap();

        let expected: Vec<(Tier, String)> = plan
            .must_have
            .iter()
            .map(|r| (Tier::MustHave, r.name.clone()))
            .chain(
                plan.good_to_have
                    .iter()
                    .map(|r| (Tier::GoodToHave, r.name.clone())),
            )
            .collect();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn csv_row_count_matches_plan_size(req in any_request()) {
        let plan = RecommendationEngine::new().recommend(&req);
        let csv = export::plan_to_csv(&plan).unwrap();

        // One header line plus one line per recommended product
        let expected_lines = 1 + plan.must_have.len() + plan.good_to_have.len();
        prop_assert_eq!(csv.trim_end().lines().count(), expected_lines);
    }
}

// ============================================================
// Unit Tests (non-property)
// ============================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_fallback_plan_for_unknown_industry() {
        let req = RecommendationRequest {
            industry: "Unknown Industry XYZ".to_string(),
            channel: Channel::Web,
            scale: Scale::Mid,
            needs: Needs::default(),
        };
        let plan = RecommendationEngine::new().recommend(&req);

        let must: Vec<_> = plan.must_have.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(must, vec!["UPI"]);

        let good: Vec<_> = plan.good_to_have.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(good, vec!["Payment Orchestration", "UPI Intent on mWeb"]);
    }

    #[test]
    fn test_export_headers_lead_with_tier() {
        assert_eq!(export::EXPORT_HEADERS[0], "tier");
        assert!(export::EXPORT_HEADERS.contains(&"name"));
        assert!(!export::EXPORT_HEADERS.contains(&"docs_link"));
    }

    #[test]
    fn test_no_plan_is_empty_for_form_industries() {
        let engine = RecommendationEngine::new();
        for industry in recommendation_engine::industry::Industry::all() {
            let req = RecommendationRequest {
                industry: industry.name().to_string(),
                channel: Channel::Both,
                scale: Scale::Low,
                needs: Needs::default(),
            };
            assert!(!engine.recommend(&req).is_empty());
        }
    }
}
