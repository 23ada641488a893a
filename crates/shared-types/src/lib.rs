pub mod types;

pub use types::{
    Channel, Needs, ProductRecord, Recommendation, RecommendationRequest, Scale, Tier,
};
