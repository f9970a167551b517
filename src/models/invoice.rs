//! Invoice data model

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Resource, StudentSummary};
use crate::forms::FieldDescriptor;

/// A fee invoice issued to one student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub student_id: i64,
    pub student: Option<StudentSummary>,
    /// Fee schedule this invoice was issued against
    pub fee_id: i64,
    pub amount: f64,
    /// Payment status, e.g. "pending", "paid", "overdue"
    pub status: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for invoice create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub student_id: i64,
    pub fee_id: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("student_id", "Student").required(),
        FieldDescriptor::new("fee_id", "Fee").required(),
        FieldDescriptor::new("amount", "Amount")
            .default_value(json!(0))
            .min(0.0),
        FieldDescriptor::new("status", "Status").max_length(20),
        FieldDescriptor::new("issue_date", "Issue Date"),
        FieldDescriptor::new("due_date", "Due Date"),
    ]
});

impl Resource for Invoice {
    type Record = Invoice;
    type FormData = InvoiceForm;

    const ENDPOINT: &'static str = "invoices";
    const SINGULAR: &'static str = "Invoice";

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn record_id(record: &Self::Record) -> i64 {
        record.id
    }

    fn display_name(record: &Self::Record) -> String {
        format!("Invoice #{}", record.id)
    }
}
