//! Teacher data model
//!
//! Deleting a teacher is documented by the backend as deactivation, not
//! erasure; the record keeps its history and drops out of the default
//! active-only listing.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{DepartmentSummary, Resource, ToggleStatus};
use crate::forms::FieldDescriptor;

/// A teaching staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier
    pub id: i64,

    pub first_name: String,
    pub last_name: String,

    /// Work email, unique across staff
    pub email: String,

    pub phone: Option<String>,

    /// Assigned department
    pub department_id: i64,

    /// Embedded summary of the assigned department
    pub department: Option<DepartmentSummary>,

    /// Highest qualification held
    pub qualification: Option<String>,

    pub joining_date: Option<NaiveDate>,

    /// Whether the teacher is active
    pub is_active: bool,

    /// Set when the teacher has been deactivated
    pub deleted_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for teacher create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub department_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("first_name", "First Name").required().max_length(50),
        FieldDescriptor::new("last_name", "Last Name").required().max_length(50),
        FieldDescriptor::new("email", "Email").required().max_length(150),
        FieldDescriptor::new("phone", "Phone").max_length(20),
        FieldDescriptor::new("department_id", "Department").required(),
        FieldDescriptor::new("qualification", "Qualification").max_length(150),
        FieldDescriptor::new("joining_date", "Joining Date"),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Teacher {
    type Record = Teacher;
    type FormData = TeacherForm;

    const ENDPOINT: &'static str = "teachers";
    const SINGULAR: &'static str = "Teacher";
    const SOFT_DELETE: bool = true;

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn record_id(record: &Self::Record) -> i64 {
        record.id
    }

    fn display_name(record: &Self::Record) -> String {
        format!("{} {}", record.first_name, record.last_name)
    }
}

impl ToggleStatus for Teacher {}
