//! Fee data model

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ClassSummary, Resource};
use crate::forms::FieldDescriptor;

/// A fee schedule applicable to one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub id: i64,
    /// Fee name, e.g. "Term 1 Tuition"
    pub name: String,
    pub class_id: i64,
    pub class: Option<ClassSummary>,
    /// Amount due per student
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for fee create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeForm {
    pub name: String,
    pub class_id: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Fee Name").required().max_length(100),
        FieldDescriptor::new("class_id", "Class").required(),
        FieldDescriptor::new("amount", "Amount")
            .default_value(json!(0))
            .min(0.0),
        FieldDescriptor::new("due_date", "Due Date"),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Fee {
    type Record = Fee;
    type FormData = FeeForm;

    const ENDPOINT: &'static str = "fees";
    const SINGULAR: &'static str = "Fee";

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
