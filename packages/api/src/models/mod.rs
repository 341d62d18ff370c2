//! Database rows and their client-safe projections.
//!
//! Each `*Row` type derives `sqlx::FromRow` and maps to the matching
//! `model::*Info` via a projection method that converts ids to strings and
//! drops server-only columns (password hash, timestamps).

#[cfg(feature = "server")]
mod rows;

#[cfg(feature = "server")]
pub use rows::{ClassRow, FlashcardSetRow, NoteRow, ReportRow, TestRow, User};
