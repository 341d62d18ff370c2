//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{clear_user, set_loading, set_user, use_auth, AuthProvider, AuthState, LogoutButton};

mod classes;
pub use classes::{
    get_class_by_id, load_classes, set_classes, use_classes, ClassState, ClassesProvider,
};

mod client;
pub use client::ServerClient;

mod navbar;
pub use navbar::Navbar;
