#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub rationale: String,
    pub integration: String,
    pub api_operations: Vec<String>,
    pub api_rationale: String,
    pub features: Option<String>,
    pub docs_link: Option<String>,
    pub demo_link: Option<String>,
}

/// Recommendation tier attached to a product in the flattened export
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    MustHave,
    GoodToHave,
}

impl Tier {
    /// Parse from the export label (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "must-have" | "must have" | "must" => Some(Tier::MustHave),
            "good-to-have" | "good to have" | "good" => Some(Tier::GoodToHave),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::MustHave => write!(f, "must-have"),
            Tier::GoodToHave => write!(f, "good-to-have"),
        }
    }
}

/// Sales channel selected on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    App,
    Web,
    Both,
}

impl Channel {
    /// Parse from a form label (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "app" => Some(Channel::App),
            "web" => Some(Channel::Web),
            "both" => Some(Channel::Both),
            _ => None,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::App => write!(f, "App"),
            Channel::Web => write!(f, "Web"),
            Channel::Both => write!(f, "Both"),
        }
    }
}

/// Monthly transaction volume band. Ordinal: `Low < Mid < High < VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Low,
    Mid,
    High,
    VeryHigh,
}

impl Scale {
    /// Parse from a form label (case-insensitive; accepts "Very High" and "very_high")
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Scale::Low),
            "mid" => Some(Scale::Mid),
            "high" => Some(Scale::High),
            "very high" | "very_high" | "veryhigh" => Some(Scale::VeryHigh),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Low => write!(f, "Low"),
            Scale::Mid => write!(f, "Mid"),
            Scale::High => write!(f, "High"),
            Scale::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Optional need checkboxes from the intake form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Needs {
    #[serde(default)]
    pub recurring_billing: bool,
    #[serde(default)]
    pub emi_or_bnpl: bool,
    #[serde(default)]
    pub payouts: bool,
    #[serde(default)]
    pub offers: bool,
    #[serde(default)]
    pub orchestration: bool,
}

/// One merchant's answers; built fresh per request and never persisted.
///
/// `industry` is a free string. Labels outside the enumerated industry set
/// are not rejected; the assembler seeds them from the fallback pair.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecommendationRequest {
    pub industry: String,
    pub channel: Channel,
    pub scale: Scale,
    #[serde(default)]
    pub needs: Needs,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Recommendation {
    pub must_have: Vec<ProductRecord>,
    pub good_to_have: Vec<ProductRecord>,
    pub generated_at: u64,
}

impl Recommendation {
    /// True when neither tier has anything to show ("no recommendations" state)
    pub fn is_empty(&self) -> bool {
        self.must_have.is_empty() && self.good_to_have.is_empty()
    }
}
