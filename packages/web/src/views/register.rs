//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{set_user, use_auth, ServerClient};

use crate::views::raw_form;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the class list
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Classes {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        spawn(async move {
            error.set(None);
            loading.set(true);

            // The handler validates and reports through the outcome; the
            // view only decides where to go on success.
            let outcome = actions::auth::register(&ServerClient, &form).await;
            if outcome.success {
                if let Some(user) = outcome.data {
                    set_user(auth, user);
                }
                nav.push(Route::Classes {});
            } else {
                loading.set(false);
                error.set(Some(outcome.message));
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Create Account"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign up for StudyHall"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                Input {
                    class: "w-full",
                    r#type: "text",
                    name: "firstName",
                    placeholder: "First name",
                }

                Input {
                    class: "w-full",
                    r#type: "text",
                    name: "lastName",
                    placeholder: "Last name",
                }

                select {
                    class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none",
                    name: "role",
                    option { value: "student", "Student" }
                    option { value: "teacher", "Teacher" }
                }

                Input {
                    class: "w-full",
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                }

                Input {
                    class: "w-full",
                    r#type: "password",
                    name: "password",
                    placeholder: "Password (min 8 characters)",
                }

                Input {
                    class: "w-full",
                    r#type: "password",
                    name: "confirmPassword",
                    placeholder: "Confirm password",
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Login {},
                    "Sign in"
                }
            }
        }
    }
}
