//! Flat CSV export of a recommendation
//!
//! Must-have rows first, then good-to-have, one leading tier column plus
//! the record fields. Documentation and demo links are omitted from the
//! export; the operation list is joined into a single cell.

use shared_types::{ProductRecord, Recommendation, Tier};
use thiserror::Error;

/// Column headers of the exported plan
pub const EXPORT_HEADERS: &[&str] = &[
    "tier",
    "name",
    "rationale",
    "integration",
    "api_operations",
    "api_rationale",
    "features",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("exported plan is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("row {row} is missing the `{column}` column")]
    MissingColumn { row: usize, column: &'static str },

    #[error("unknown tier label: {0}")]
    UnknownTier(String),
}

/// Serialize a recommendation to CSV with headers, UTF-8 encoded
pub fn plan_to_csv(plan: &Recommendation) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(EXPORT_HEADERS)?;
        for record in &plan.must_have {
            write_row(&mut writer, Tier::MustHave, record)?;
        }
        for record in &plan.good_to_have {
            write_row(&mut writer, Tier::GoodToHave, record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

fn write_row<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    tier: Tier,
    record: &ProductRecord,
) -> Result<(), ExportError> {
    let tier_label = tier.to_string();
    let operations = record.api_operations.join(", ");
    writer.write_record([
        tier_label.as_str(),
        record.name.as_str(),
        record.rationale.as_str(),
        record.integration.as_str(),
        operations.as_str(),
        record.api_rationale.as_str(),
        record.features.as_deref().unwrap_or(""),
    ])?;
    Ok(())
}

/// Parse an exported plan back to its (tier, name) pairs
pub fn read_plan_csv(text: &str) -> Result<Vec<(Tier, String)>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut pairs = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let tier_label = record
            .get(0)
            .ok_or(ExportError::MissingColumn { row, column: "tier" })?;
        let name = record
            .get(1)
            .ok_or(ExportError::MissingColumn { row, column: "name" })?;
        let tier = Tier::parse_code(tier_label)
            .ok_or_else(|| ExportError::UnknownTier(tier_label.to_string()))?;
        pairs.push((tier, name.to_string()));
    }
    Ok(pairs)
}
