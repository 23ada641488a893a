//! Reference data on Indian digital payments, for the educational view
//!
//! GMV/volume series per payment method across fiscal years, plus the
//! short list of forward-looking trends. Static, read-only.

use serde::Serialize;

/// Fiscal years covered by every series; (E) marks estimates
pub const FISCAL_YEARS: &[&str] = &[
    "FY21-22",
    "FY22-23",
    "FY23-24 (E)",
    "FY24-25 (E)",
    "FY25-26 (E)",
    "FY26-27 (E)",
];

/// One payment method's series. `None` marks a year with no reported figure.
#[derive(Debug, Clone, Serialize)]
pub struct MarketStat {
    pub method: &'static str,
    pub unit: &'static str,
    pub series: [Option<f64>; 6],
}

const MARKET_STATS: &[MarketStat] = &[
    MarketStat {
        method: "UPI",
        unit: "INR trillion",
        series: [
            Some(84.1),
            Some(139.14),
            Some(207.6),
            Some(291.3),
            Some(365.7),
            Some(455.6),
        ],
    },
    MarketStat {
        method: "PPIs",
        unit: "INR trillion",
        series: [None, Some(3.7), Some(3.9), Some(4.1), Some(4.3), Some(4.6)],
    },
    MarketStat {
        method: "BBPS",
        unit: "INR billion",
        series: [
            Some(1.152),
            Some(1.916),
            Some(3.054),
            Some(4.646),
            Some(6.689),
            Some(9.086),
        ],
    },
    MarketStat {
        method: "ATMs (Volumes)",
        unit: "Billion transactions",
        series: [
            Some(6.5),
            Some(6.9),
            Some(7.4),
            Some(7.8),
            Some(8.2),
            Some(8.6),
        ],
    },
    MarketStat {
        method: "NACH",
        unit: "INR trillion",
        series: [
            Some(246.0),
            Some(307.0),
            Some(359.0),
            Some(422.0),
            Some(498.0),
            Some(591.0),
        ],
    },
];

/// GMV/volume table in display order
pub fn market_stats() -> &'static [MarketStat] {
    MARKET_STATS
}

/// Trends shaping digital payments, in display order
pub fn payment_trends() -> &'static [&'static str] {
    &[
        "UPI will continue dominating with innovations like UPI Lite, UPI Credit on RuPay, and international UPI acceptance.",
        "RBI-driven card tokenization ensures safer card payments while enabling subscription models.",
        "AI/ML-powered fraud detection and smart routing will reduce transaction failures.",
        "Embedded finance and BNPL (Buy Now Pay Later) will expand across e-commerce and retail.",
        "Cross-border UPI and CBDC (Digital Rupee) will open new possibilities.",
        "Open Banking and Account Aggregators will allow seamless financial data sharing for better credit products.",
        "Near real-time settlements and 24x7 payment systems will become standard.",
        "One Click UPI and advanced authentication methods will improve both UX and security.",
    ]
}
