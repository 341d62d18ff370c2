//! Page views. Each form view builds the raw name→value map from the
//! submitted event, hands it to an action handler, shows the outcome, and
//! navigates on success.

use dioxus::prelude::*;

mod account;
mod class_detail;
mod classes;
mod forgot_password;
mod home;
mod login;
mod register;
mod report;
mod study;
mod update_password;

pub use account::Account;
pub use class_detail::ClassDetail;
pub use classes::Classes;
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use login::Login;
pub use register::Register;
pub use report::NewReport;
pub use update_password::UpdatePassword;

/// Flatten a form event into the name→value map the handlers consume.
pub(crate) fn raw_form(evt: &FormEvent) -> actions::RawForm {
    evt.values()
        .into_iter()
        .map(|(name, value)| (name, value.as_value()))
        .collect()
}
