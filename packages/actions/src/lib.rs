//! Action handlers: one function per user-facing operation.
//!
//! Every handler follows the same sequence — extract typed fields from the
//! raw form map, validate against the entity schema, invoke the
//! [`DataClient`], and fold the result into a uniform [`model::Outcome`].
//! Nothing is thrown past a handler: validation failures, remote errors, and
//! unexpected faults all come back as `success: false` with a user-facing
//! message, and the client is never contacted when validation fails.

use std::collections::HashMap;

pub mod auth;
pub mod classes;
pub mod reports;
pub mod study;

mod client;
pub use client::{ClientError, DataClient};

/// Name → value map extracted from a submitted form. The field names
/// (`email`, `password`, `confirmPassword`, `firstName`, ...) are the
/// binding contract with the views.
pub type RawForm = HashMap<String, String>;

/// Read a form field, trimmed. Missing fields read as empty so the schema
/// reports them as required rather than the handler panicking.
pub(crate) fn field(form: &RawForm, name: &str) -> String {
    form.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Read a form field verbatim. Passwords are never trimmed.
pub(crate) fn raw_field(form: &RawForm, name: &str) -> String {
    form.get(name).cloned().unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod mock;
