use crate::domain::model::{ConsolidatedEntry, Record};
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Total textual coercion for any JSON value, absent fields included.
/// Strings lose their quotes, everything else takes its compact JSON form,
/// so heterogeneously typed fields stay comparable across files.
pub fn coerce(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// In-memory mapping from identifier to its winning (summary, resolver)
/// pair. Lives for exactly one run; entries are overwritten but never
/// removed.
pub struct ConsolidationTable {
    id_field: String,
    summary_field: String,
    resolver_field: String,
    entries: HashMap<String, ConsolidatedEntry>,
}

impl ConsolidationTable {
    pub fn new(id_field: &str, summary_field: &str, resolver_field: &str) -> Self {
        Self {
            id_field: id_field.to_string(),
            summary_field: summary_field.to_string(),
            resolver_field: resolver_field.to_string(),
            entries: HashMap::new(),
        }
    }

    /// Folds one record into the table. Records without the identifier
    /// field are skipped. When an identifier already has an entry with a
    /// different summary, the incoming pair replaces it only if its
    /// resolver is strictly greater; on a resolver tie the first-seen
    /// pair stays. Callers must fold records in original combined order
    /// (files in selection order, records in array order) for the tie
    /// rule to hold.
    pub fn fold(&mut self, record: &Record) {
        let Some(id_value) = record.fields.get(&self.id_field) else {
            return;
        };
        let id_key = coerce(Some(id_value));
        let summary = coerce(record.fields.get(&self.summary_field));
        let resolver = coerce(record.fields.get(&self.resolver_field));

        match self.entries.entry(id_key) {
            Entry::Vacant(slot) => {
                slot.insert(ConsolidatedEntry { summary, resolver });
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.summary != summary && resolver > existing.resolver {
                    *existing = ConsolidatedEntry { summary, resolver };
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id_key: &str) -> Option<&ConsolidatedEntry> {
        self.entries.get(id_key)
    }

    /// Counts unique identifiers per final summary value. Derived in one
    /// pass over the finished table; the BTreeMap keeps report ordering
    /// stable across runs.
    pub fn summary_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.values() {
            *counts.entry(entry.summary.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn table() -> ConsolidationTable {
        ConsolidationTable::new("id", "status", "ts")
    }

    #[test]
    fn test_first_record_creates_entry() {
        let mut t = table();
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "2020-01-01"})));
        assert_eq!(t.len(), 1);
        let entry = t.get("1").unwrap();
        assert_eq!(entry.summary, "open");
        assert_eq!(entry.resolver, "2020-01-01");
    }

    #[test]
    fn test_missing_identifier_is_skipped() {
        let mut t = table();
        t.fold(&record(json!({"status": "open", "ts": "2020-01-01"})));
        assert!(t.is_empty());
    }

    #[test]
    fn test_equal_summaries_ignore_resolver() {
        let mut t = table();
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "2020-01-01"})));
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "2999-12-31"})));
        let entry = t.get("1").unwrap();
        assert_eq!(entry.summary, "open");
        // resolver is not compared when summaries agree
        assert_eq!(entry.resolver, "2020-01-01");
    }

    #[test]
    fn test_higher_resolver_wins_on_conflict() {
        let mut t = table();
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "2020-01-01"})));
        t.fold(&record(json!({"id": "1", "status": "closed", "ts": "2020-02-01"})));
        let entry = t.get("1").unwrap();
        assert_eq!(entry.summary, "closed");
        assert_eq!(entry.resolver, "2020-02-01");
    }

    #[test]
    fn test_lower_resolver_loses_regardless_of_order() {
        let mut t = table();
        t.fold(&record(json!({"id": "1", "status": "closed", "ts": "2020-02-01"})));
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "2020-01-01"})));
        let entry = t.get("1").unwrap();
        assert_eq!(entry.summary, "closed");
        assert_eq!(entry.resolver, "2020-02-01");
    }

    #[test]
    fn test_resolver_tie_keeps_first_seen() {
        let mut t = table();
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "2020-01-01"})));
        t.fold(&record(json!({"id": "1", "status": "closed", "ts": "2020-01-01"})));
        // strict ">" comparison: an equal resolver never replaces
        assert_eq!(t.get("1").unwrap().summary, "open");
    }

    #[test]
    fn test_heterogeneous_identifier_types_collide() {
        let mut t = table();
        t.fold(&record(json!({"id": 1, "status": "open", "ts": "a"})));
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "b"})));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_absent_summary_and_resolver_coerce_to_null() {
        let mut t = table();
        t.fold(&record(json!({"id": "1"})));
        let entry = t.get("1").unwrap();
        assert_eq!(entry.summary, "null");
        assert_eq!(entry.resolver, "null");
    }

    #[test]
    fn test_coerce_covers_all_value_types() {
        assert_eq!(coerce(None), "null");
        assert_eq!(coerce(Some(&json!(null))), "null");
        assert_eq!(coerce(Some(&json!("open"))), "open");
        assert_eq!(coerce(Some(&json!(42))), "42");
        assert_eq!(coerce(Some(&json!(1.5))), "1.5");
        assert_eq!(coerce(Some(&json!(true))), "true");
        assert_eq!(coerce(Some(&json!(["a", 1]))), r#"["a",1]"#);
        assert_eq!(coerce(Some(&json!({"k": "v"}))), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_summary_counts_over_final_entries() {
        let mut t = table();
        t.fold(&record(json!({"id": "1", "status": "open", "ts": "a"})));
        t.fold(&record(json!({"id": "2", "status": "open", "ts": "a"})));
        t.fold(&record(json!({"id": "3", "status": "closed", "ts": "a"})));
        t.fold(&record(json!({"id": "3", "status": "open", "ts": "b"})));

        let counts = t.summary_counts();
        assert_eq!(counts.get("open"), Some(&3));
        assert_eq!(counts.get("closed"), None);
        assert_eq!(counts.values().sum::<usize>(), t.len());
    }
}
