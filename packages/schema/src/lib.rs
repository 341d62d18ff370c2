//! Declarative form validation.
//!
//! A [`Schema`] is an ordered list of per-field rules plus a second pass of
//! cross-field refinements, evaluated by one generic validator. Each entity
//! module exposes a function returning its schema; callers run
//! `schema::auth::register().validate(&payload)` and get either `Ok(())` or
//! a [`FieldErrors`] mapping field paths to messages.

pub mod account;
pub mod auth;
pub mod classroom;
pub mod report;
pub mod study;

mod engine;
pub use engine::{optional, FieldError, FieldErrors, Schema};
