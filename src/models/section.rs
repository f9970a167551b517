//! Section data model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ClassSummary, Resource};
use crate::forms::FieldDescriptor;

/// A section within a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub class_id: i64,
    pub class: Option<ClassSummary>,
    pub capacity: i64,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Writable projection for section create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionForm {
    pub name: String,
    pub class_id: i64,
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
        FieldDescriptor::new("name", "Section Name").required().max_length(20),
        FieldDescriptor::new("class_id", "Class").required(),
        FieldDescriptor::new("capacity", "Capacity")
            .default_value(json!(0))
            .min(0.0),
        FieldDescriptor::new("is_active", "Active").default_value(json!(true)),
    ]
});

impl Resource for Section {
    type Record = Section;
    type FormData = SectionForm;

    const ENDPOINT: &'static str = "sections";
    const SINGULAR: &'static str = "Section";

    fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    fn record_id(record: &Self::Record) -> i64 {
        record.id
    }

    fn display_name(record: &Self::Record) -> String {
        match record.class {
            Some(ref class) => format!("{} {}", class.name, record.name),
            None => record.name.clone(),
        }
    }
}
