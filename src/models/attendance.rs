//! Attendance data model

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Resource, StudentSummary};
use crate::forms::FieldDescriptor;

/// One student's attendance entry for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub student: Option<StudentSummary>,
    pub class_id: i64,
    pub date: NaiveDate,
    /// Attendance status, e.g. "present", "absent", "late"
    pub status: String,
    pub remark: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for attendance create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceForm {
    pub student_id: i64,
    pub class_id: i64,
    pub date: NaiveDate,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("student_id", "Student").required(),
        FieldDescriptor::new("class_id", "Class").required(),
        FieldDescriptor::new("date", "Date").required(),
        FieldDescriptor::new("status", "Status").required().max_length(20),
        FieldDescriptor::new("remark", "Remark").max_length(200),
    ]
});

impl Resource for Attendance {
    type Record = Attendance;
    type FormData = AttendanceForm;

    const ENDPOINT: &'static str = "attendance";
    const SINGULAR: &'static str = "Attendance";

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn record_id(record: &Self::Record) -> i64 {
        record.id
    }

    fn display_name(record: &Self::Record) -> String {
        format!("Attendance for {}", record.date)
    }
}
