use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A checklist document: section name -> item name -> completion flag.
/// Leaf values are kept as raw JSON so non-boolean flags stay visible to the
/// completeness rule instead of being coerced at parse time.
pub type Checklist = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

/// Result of looking up a domain's checklist file. Absence is a normal
/// outcome, not an error.
#[derive(Debug, Clone)]
pub enum ChecklistOutcome {
    Present(Checklist),
    Absent,
}

#[derive(Debug, Clone)]
pub struct DomainChecklist {
    pub domain: String,
    pub outcome: ChecklistOutcome,
}

/// One scoreboard row, derived fresh each run. Only the rendered aggregate
/// report is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessRecord {
    pub domain: String,
    pub percent: f64,
    pub total_items: usize,
    pub audit_date: NaiveDate,
    pub notes: String,
}

impl ReadinessRecord {
    /// A checklist with zero items (or no checklist at all) renders as the
    /// bare "0%", everything else with one decimal place.
    pub fn percent_cell(&self) -> String {
        if self.total_items == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.percent)
        }
    }

    pub fn notes_cell(&self) -> &str {
        if self.notes.is_empty() {
            "—"
        } else {
            &self.notes
        }
    }
}

/// Explicit truthiness for checklist leaf values: `true`, non-zero numbers
/// and non-empty strings/arrays/objects count as complete.
pub fn is_complete(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Null => false,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}
