//! Test factories for generating test data
//!
//! Factories create randomized records with unique ids, useful when a test
//! needs a collection of distinct rows rather than one fixed fixture.

use std::sync::atomic::{AtomicI64, Ordering};

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};

/// Factory for teacher records
pub struct TeacherFactory {
    counter: AtomicI64,
}

impl Default for TeacherFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TeacherFactory {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(1),
        }
    }

    /// Create a unique active teacher record
    pub fn record(&self) -> Value {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        json!({
            "id": id,
            "first_name": first,
            "last_name": last,
            "email": format!("teacher_{}@campus.example", id),
            "phone": null,
            "department_id": 1,
            "department": null,
            "qualification": null,
            "joining_date": null,
            "is_active": true,
            "deleted_at": null,
            "created_at": null,
            "updated_at": null
        })
    }

    /// Create a batch of unique records
    pub fn batch(&self, count: usize) -> Vec<Value> {
        (0..count).map(|_| self.record()).collect()
    }
}

/// Factory for student records
pub struct StudentFactory {
    counter: AtomicI64,
}

impl Default for StudentFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentFactory {
    pub fn new() -> Self {
        Self {
            counter: AtomicI64::new(1),
        }
    }

    /// Create a unique active student record
    pub fn record(&self) -> Value {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        json!({
            "id": id,
            "first_name": first,
            "last_name": last,
            "admission_number": format!("ADM-{:05}", id),
            "email": null,
            "class_id": 1,
            "class": null,
            "section_id": null,
            "guardian_name": null,
            "guardian_phone": null,
            "date_of_birth": null,
            "admission_date": null,
            "is_active": true,
            "deleted_at": null,
            "created_at": null,
            "updated_at": null
        })
    }

    pub fn batch(&self, count: usize) -> Vec<Value> {
        (0..count).map(|_| self.record()).collect()
    }
}
