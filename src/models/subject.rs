//! Subject data model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{DepartmentSummary, Resource};
use crate::forms::FieldDescriptor;

/// A taught subject, owned by a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier
    pub id: i64,

    /// Subject name
    pub name: String,

    /// Short subject code, unique within the department
    pub code: String,

    /// Owning department
    pub department_id: i64,

    /// Embedded summary of the owning department
    pub department: Option<DepartmentSummary>,

    /// Credit weight, 0 to 10
    pub credits: i64,

    /// Free-form description
    pub description: Option<String>,

    /// Whether the subject is active
    pub is_active: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for subject create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectForm {
    pub name: String,
    pub code: String,
    pub department_id: i64,
    #[serde(default)]
    pub credits: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Subject Name").required().max_length(100),
        FieldDescriptor::new("code", "Subject Code").required().max_length(20),
        FieldDescriptor::new("department_id", "Department").required(),
        FieldDescriptor::new("credits", "Credits")
            .default_value(json!(0))
            .min(0.0)
            .max(10.0),
        FieldDescriptor::new("description", "Description").max_length(500),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Subject {
    type Record = Subject;
    type FormData = SubjectForm;

    const ENDPOINT: &'static str = "subjects";
    const SINGULAR: &'static str = "Subject";

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
