//! Holiday data model

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::forms::FieldDescriptor;

/// A school holiday period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for holiday create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayForm {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Holiday Name").required().max_length(100),
        FieldDescriptor::new("start_date", "Start Date").required(),
        FieldDescriptor::new("end_date", "End Date").required(),
        FieldDescriptor::new("description", "Description").max_length(500),
    ]
});

impl Resource for Holiday {
    type Record = Holiday;
    type FormData = HolidayForm;

    const ENDPOINT: &'static str = "holidays";
    const SINGULAR: &'static str = "Holiday";

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
