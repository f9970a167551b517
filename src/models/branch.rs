//! Branch data model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Resource, ToggleStatus};
use crate::forms::FieldDescriptor;

/// A school branch (campus location)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Unique identifier
    pub id: i64,

    /// Branch name
    pub name: String,

    /// Short branch code, unique across the school
    pub code: String,

    /// Street address
    pub address: Option<String>,

    /// City
    pub city: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Whether the branch is active
    pub is_active: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Embedded branch summary carried by related records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchSummary {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}

/// Writable projection for branch create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchForm {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

static FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("name", "Branch Name").required().max_length(150),
        FieldDescriptor::new("code", "Branch Code").required().max_length(20),
        FieldDescriptor::new("address", "Address").max_length(250),
        FieldDescriptor::new("city", "City").max_length(100),
        FieldDescriptor::new("phone", "Phone").max_length(20),
        FieldDescriptor::new("email", "Email").max_length(150),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Branch {
    type Record = Branch;
    type FormData = BranchForm;

    const ENDPOINT: &'static str = "branches";
    const SINGULAR: &'static str = "Branch";

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

impl ToggleStatus for Branch {}
