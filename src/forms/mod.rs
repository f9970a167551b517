//! Data-driven form state
//!
//! A form is a flat set of fields described by static `FieldDescriptor`
//! tables, one per entity. Every mutation synchronously re-validates the
//! mutated field; messages become visible once a field is touched.

pub mod rules;

use serde_json::{Map, Value};
use tracing::warn;

pub use rules::Rule;

/// Describes one writable form field of an entity
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Wire name of the field, as the backend expects it
    pub name: &'static str,
    /// Human-readable label used in validation messages
    pub label: &'static str,
    /// Declarative constraints, evaluated in fixed precedence order
    pub rules: Vec<Rule>,
    /// Declared default seeded into new forms; `Null` means no default
    pub default: Value,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            rules: Vec::new(),
            default: Value::Null,
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.rules.push(Rule::MaxLength(bound));
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.rules.push(Rule::Min(bound));
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.rules.push(Rule::Max(bound));
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = value;
        self
    }
}

/// Live state of one form field
#[derive(Debug, Clone)]
pub struct FieldState {
    pub descriptor: &'static FieldDescriptor,
    pub value: Value,
    pub touched: bool,
    pub message: Option<String>,
}

impl FieldState {
    fn seeded(descriptor: &'static FieldDescriptor) -> Self {
        Self {
            descriptor,
            value: descriptor.default.clone(),
            touched: false,
            message: None,
        }
    }

    fn revalidate(&mut self) {
        self.message =
            rules::first_violation(&self.descriptor.rules, &self.value, self.descriptor.label);
    }

    /// Message to render; hidden until the field has been touched
    pub fn visible_message(&self) -> Option<&str> {
        if self.touched {
            self.message.as_deref()
        } else {
            None
        }
    }
}

/// Field-keyed form state for one entity
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FieldState>,
}

impl FormModel {
    /// New form seeded with every field's declared default
    pub fn from_descriptors(descriptors: &'static [FieldDescriptor]) -> Self {
        let mut fields: Vec<FieldState> = descriptors.iter().map(FieldState::seeded).collect();
        for field in &mut fields {
            field.revalidate();
        }
        Self { fields }
    }

    /// Set a field value, marking it touched and re-validating it synchronously
    pub fn set(&mut self, name: &str, value: Value) {
        match self.fields.iter_mut().find(|f| f.descriptor.name == name) {
            Some(field) => {
                field.value = value;
                field.touched = true;
                field.revalidate();
            }
            None => warn!(field = name, "ignoring write to unknown form field"),
        }
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.descriptor.name == name)
            .map(|f| &f.value)
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.descriptor.name == name)
    }

    /// Fields in declaration order, for data-driven rendering
    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Mark every field touched so all pending messages become visible
    pub fn touch_all(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
            field.revalidate();
        }
    }

    /// Re-validate every field; true when no rule fails
    pub fn validate_all(&mut self) -> bool {
        let mut clean = true;
        for field in &mut self.fields {
            field.revalidate();
            if field.message.is_some() {
                clean = false;
            }
        }
        clean
    }

    /// Merge a fetched record into the form.
    ///
    /// Only descriptor-named fields are taken; server-assigned fields (id,
    /// timestamps) and embedded relations are ignored because no descriptor
    /// names them. Merged fields start untouched with no visible message.
    pub fn merge_record(&mut self, record: &Value) {
        let Some(object) = record.as_object() else {
            warn!("record is not a JSON object, nothing to merge");
            return;
        };
        for field in &mut self.fields {
            if let Some(value) = object.get(field.descriptor.name) {
                field.value = value.clone();
                field.touched = false;
                field.revalidate();
            }
        }
    }

    /// Writable payload: descriptor fields only, nulls omitted.
    ///
    /// The payload can never carry the record id, audit timestamps, or
    /// embedded relations; those are repopulated only by a successful round
    /// trip.
    pub fn payload(&self) -> Value {
        let mut object = Map::new();
        for field in &self.fields {
            if !field.value.is_null() {
                object.insert(field.descriptor.name.to_string(), field.value.clone());
            }
        }
        Value::Object(object)
    }
}
