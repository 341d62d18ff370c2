//! Schema for the editable account profile.
//!
//! `phone` and `website` are optional. Form extraction normalizes empty
//! strings to `None` (via [`crate::optional`]) before this schema ever sees
//! the payload, so the rules here only fire on genuinely present values.

use std::sync::LazyLock;

use model::UpdateAccount;
use regex::Regex;

use crate::engine::{required, Schema};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{6,}$").unwrap());

pub fn update_account() -> Schema<UpdateAccount> {
    Schema::new()
        .rule("firstName", |p: &UpdateAccount| {
            required(&p.first_name, "First name")
        })
        .rule("lastName", |p: &UpdateAccount| {
            required(&p.last_name, "Last name")
        })
        .rule("phone", |p: &UpdateAccount| match &p.phone {
            Some(phone) if !PHONE_RE.is_match(phone) => {
                Err("Phone must be a valid phone number".to_string())
            }
            _ => Ok(()),
        })
        .rule("website", |p: &UpdateAccount| match &p.website {
            Some(site) if !site.starts_with("http://") && !site.starts_with("https://") => {
                Err("Website must start with http:// or https://".to_string())
            }
            _ => Ok(()),
        })
}
