//! Class data model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{BranchSummary, Resource};
use crate::forms::FieldDescriptor;

/// A class (year group) within a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i64,
    pub name: String,
    pub branch_id: i64,
    pub branch: Option<BranchSummary>,
    /// Maximum enrolment across all sections
    pub capacity: i64,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Embedded class summary carried by related records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
}

/// Writable projection for class create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClassForm {
    pub name: String,
    pub branch_id: i64,
    #[serde(default)]
    pub capacity: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Class Name").required().max_length(50),
        FieldDescriptor::new("branch_id", "Branch").required(),
        FieldDescriptor::new("capacity", "Capacity")
            .default_value(json!(0))
            .min(0.0),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for SchoolClass {
    type Record = SchoolClass;
    type FormData = SchoolClassForm;

    const ENDPOINT: &'static str = "classes";
    const SINGULAR: &'static str = "Class";

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
