//! Department data model

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{BranchSummary, Resource};
use crate::forms::FieldDescriptor;

/// An academic department within a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier
    pub id: i64,

    /// Department name
    pub name: String,

    /// Display name of the department head
    pub head: Option<String>,

    /// Teacher id of the department head, when one is assigned
    pub head_id: Option<i64>,

    /// Owning branch
    pub branch_id: i64,

    /// Embedded summary of the owning branch
    pub branch: Option<BranchSummary>,

    /// Date the department was established
    pub established_date: Option<NaiveDate>,

    /// Number of enrolled students (maintained by the backend)
    pub students_count: i64,

    /// Number of assigned teachers (maintained by the backend)
    pub teachers_count: i64,

    /// Whether the department is active
    pub is_active: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Embedded department summary carried by related records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub id: i64,
    pub name: String,
}

/// Writable projection for department create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentForm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_id: Option<i64>,
    pub branch_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_date: Option<NaiveDate>,
    #[serde(default)]
    pub students_count: i64,
    #[serde(default)]
    pub teachers_count: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Department Name").required().max_length(100),
        FieldDescriptor::new("head", "Head of Department").max_length(100),
        FieldDescriptor::new("head_id", "Head Teacher"),
        FieldDescriptor::new("branch_id", "Branch").required(),
        FieldDescriptor::new("established_date", "Established Date"),
        FieldDescriptor::new("students_count", "Students Count")
            .default_value(json!(0))
            .min(0.0),
        FieldDescriptor::new("teachers_count", "Teachers Count")
            .default_value(json!(0))
            .min(0.0),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Department {
    type Record = Department;
    type FormData = DepartmentForm;

    const ENDPOINT: &'static str = "departments";
    const SINGULAR: &'static str = "Department";

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
