//! Student data model
//!
//! Like teachers, students are deactivated rather than erased; enrolment
//! history must survive a delete.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ClassSummary, Resource, ToggleStatus};
use crate::forms::FieldDescriptor;

/// An enrolled student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: i64,

    pub first_name: String,
    pub last_name: String,

    /// Admission number, unique across the school
    pub admission_number: String,

    pub email: Option<String>,

    /// Enrolled class
    pub class_id: i64,

    /// Embedded summary of the enrolled class
    pub class: Option<ClassSummary>,

    /// Section within the class, when assigned
    pub section_id: Option<i64>,

    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
    pub admission_date: Option<NaiveDate>,

    /// Whether the student is active
    pub is_active: bool,

    /// Set when the student has been deactivated
    pub deleted_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Embedded student summary carried by related records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub admission_number: Option<String>,
}

/// Writable projection for student create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub admission_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub class_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_date: Option<NaiveDate>,
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
        FieldDescriptor::new("admission_number", "Admission Number")
            .required()
            .max_length(30),
        FieldDescriptor::new("email", "Email").max_length(150),
        FieldDescriptor::new("class_id", "Class").required(),
        FieldDescriptor::new("section_id", "Section"),
        FieldDescriptor::new("guardian_name", "Guardian Name").max_length(100),
        FieldDescriptor::new("guardian_phone", "Guardian Phone").max_length(20),
        FieldDescriptor::new("date_of_birth", "Date of Birth"),
        FieldDescriptor::new("admission_date", "Admission Date"),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Student {
    type Record = Student;
    type FormData = StudentForm;

    const ENDPOINT: &'static str = "students";
    const SINGULAR: &'static str = "Student";
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

impl ToggleStatus for Student {}
