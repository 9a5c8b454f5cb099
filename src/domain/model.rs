use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// One JSON object from an input file. Field values keep their original
/// JSON type until they are coerced to text during consolidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: HashMap<String, serde_json::Value>,
}

/// The winning (summary, resolver) pair chosen so far for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedEntry {
    pub summary: String,
    pub resolver: String,
}

/// Final output of a consolidation run.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub unique_records: usize,
    pub counts: BTreeMap<String, usize>,
    pub elapsed: Duration,
}

impl std::fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Total number of unique records in all the files: {}",
            self.unique_records
        )?;
        for (summary, count) in &self.counts {
            writeln!(f, "{}={}", summary, count)?;
        }
        write!(f, "Tool execution completed in {:?}", self.elapsed)
    }
}
