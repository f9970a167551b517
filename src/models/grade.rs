//! Grade data model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Resource;
use crate::forms::FieldDescriptor;

/// A grading band mapping a score range to a letter grade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    /// Grade label, e.g. "A+"
    pub name: String,
    /// Lower score bound, inclusive, 0 to 100
    pub min_score: i64,
    /// Upper score bound, inclusive, 0 to 100
    pub max_score: i64,
    pub remark: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for grade create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeForm {
    pub name: String,
    #[serde(default)]
    pub min_score: i64,
    #[serde(default)]
    pub max_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Grade Name").required().max_length(50),
        FieldDescriptor::new("min_score", "Minimum Score")
            .default_value(json!(0))
            .min(0.0)
            .max(100.0),
        FieldDescriptor::new("max_score", "Maximum Score")
            .default_value(json!(0))
            .min(0.0)
            .max(100.0),
        FieldDescriptor::new("remark", "Remark").max_length(200),
    ]
});

impl Resource for Grade {
    type Record = Grade;
    type FormData = GradeForm;

    const ENDPOINT: &'static str = "grades";
    const SINGULAR: &'static str = "Grade";

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn record_id(record: &Self::Record) -> i64 {
        record.id
    }

    fn display_name(record: &Self::Record) -> String {
        record.name.clone()
    }
}
