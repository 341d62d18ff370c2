//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use model::UserInfo;

/// Authentication state for the application.
///
/// A transient cached copy of the session user; the server session is the
/// source of truth. Overlapping in-flight updates apply in completion order
/// with no sequencing — last write wins.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Store the logged-in user.
pub fn set_user(mut auth: Signal<AuthState>, user: UserInfo) {
    auth.set(AuthState {
        user: Some(user),
        loading: false,
    });
}

/// Drop the cached user, e.g. after logout.
pub fn clear_user(mut auth: Signal<AuthState>) {
    auth.set(AuthState {
        user: None,
        loading: false,
    });
}

pub fn set_loading(mut auth: Signal<AuthState>, loading: bool) {
    let current = auth();
    auth.set(AuthState { loading, ..current });
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();

    let onclick = move |_| async move {
        if let Ok(()) = api::logout().await {
            clear_user(auth_state);
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
