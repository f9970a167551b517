//! The contract every administered entity implements
//!
//! A resource ties together its record shape, its writable form projection,
//! its backend endpoint, and the static field descriptor table that drives
//! the generic form engine.

use serde::{de::DeserializeOwned, Serialize};

use crate::forms::FieldDescriptor;

/// One administered entity type (Department, Subject, Teacher, …)
pub trait Resource: Send + Sync + 'static {
    /// Full record as returned by the backend, including the server-assigned
    /// id, audit timestamps, and any embedded related-record summaries
    type Record: DeserializeOwned + Serialize + Clone + Send + Sync + 'static;

    /// Writable projection submitted on create/update; never carries the id,
    /// timestamps, or embedded relations
    type FormData: DeserializeOwned + Serialize + Send + Sync + 'static;

    /// Backend collection path segment, e.g. `departments`
    const ENDPOINT: &'static str;

    /// Singular display name used in notifications and confirmations
    const SINGULAR: &'static str;

    /// Whether the backend documents delete as deactivation rather than
    /// erasure. Drives the default active-only list filter and confirmation
    /// wording; the wire call is the same generic delete either way.
    const SOFT_DELETE: bool = false;

    /// Static descriptor table for the writable fields, in render order
    fn fields() -> &'static [FieldDescriptor];

    /// Server-assigned identity, immutable once assigned
    fn record_id(record: &Self::Record) -> i64;

    /// Name shown when confirming destructive actions on this record
    fn display_name(record: &Self::Record) -> String;
}

/// Marker for resources whose backend exposes `PUT /{endpoint}/{id}/toggle-status`
pub trait ToggleStatus: Resource {}
