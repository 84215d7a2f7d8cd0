//! Nomination record parsing.
//!
//! Reads a delimited nominations file (comma-separated, UTF-8, header row)
//! into an ordered sequence of records. The header must contain at least the
//! four required columns; anything else in the file is passed through as-is.

use std::path::Path;

use serde::Deserialize;

use crate::error::NominationError;

/// Columns that must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "candidate_surname",
    "candidate_firstname",
    "proposer",
    "seconder",
];

/// One nomination event: a candidate plus the people who put them forward.
///
/// Proposer and seconder are free text and may be empty (a record without a
/// seconder is expected input, not an error).
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub candidate_surname: String,
    pub candidate_firstname: String,
    pub proposer: String,
    pub seconder: String,
}

impl Record {
    /// Display name used to identify the candidate node
    pub fn candidate_display_name(&self) -> String {
        format!("{} {}", self.candidate_firstname, self.candidate_surname)
    }
}

/// Read all records from a CSV file, preserving input order.
///
/// The required column set is validated against the header before any row is
/// touched; on failure the error names every missing column. Additional
/// columns are ignored. No per-row validation is performed.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, NominationError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(NominationError::Schema { missing });
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    Ok(records)
}
