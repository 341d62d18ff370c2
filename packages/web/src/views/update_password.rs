//! Update-password page.
//!
//! Reached two ways: by a signed-in user changing their password, or by a
//! logged-out user following an emailed reset link carrying a `token` query
//! parameter. The token, when present, selects the token-consuming flow.

use dioxus::prelude::*;
use model::Outcome;
use ui::components::{Button, ButtonVariant, Input, OutcomeBanner};
use ui::ServerClient;

use crate::views::raw_form;

#[component]
pub fn UpdatePassword(token: String) -> Element {
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        let token = token.clone();
        spawn(async move {
            loading.set(true);
            let result = if token.is_empty() {
                actions::auth::update_password(&ServerClient, &form).await
            } else {
                actions::auth::update_password_with_token(&ServerClient, &form, &token).await
            };
            loading.set(false);
            outcome.set(Some(result));
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-8 text-neutral-800 font-bold text-[1.75rem]",
                "Choose a new password"
            }

            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(o) = outcome() {
                    OutcomeBanner { success: o.success, message: o.message }
                }

                Input {
                    class: "w-full",
                    r#type: "password",
                    name: "password",
                    placeholder: "New password (min 8 characters)",
                }

                Input {
                    class: "w-full",
                    r#type: "password",
                    name: "confirmPassword",
                    placeholder: "Confirm new password",
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Updating..." } else { "Update password" }
                }
            }
        }
    }
}
