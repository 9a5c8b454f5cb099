use crate::domain::model::Record;
use crate::utils::error::{ConsolidateError, Result};

/// Parses one file's bytes as a JSON array of objects. Anything else, a
/// non-object element included, fails the whole run.
pub fn parse_records(file: &str, bytes: &[u8]) -> Result<Vec<Record>> {
    serde_json::from_slice(bytes).map_err(|source| ConsolidateError::FileParse {
        file: file.to_string(),
        source,
    })
}
