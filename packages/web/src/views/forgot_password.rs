//! Forgot-password page: requests a reset link by email.

use dioxus::prelude::*;
use model::Outcome;
use ui::components::{Button, ButtonVariant, Input, OutcomeBanner};
use ui::ServerClient;

use crate::views::raw_form;
use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        spawn(async move {
            loading.set(true);
            let result = actions::auth::forgot_password(&ServerClient, &form).await;
            loading.set(false);
            outcome.set(Some(result));
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Reset password"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Enter your email and we'll send you a reset link."
            }

            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(o) = outcome() {
                    OutcomeBanner { success: o.success, message: o.message }
                }

                Input {
                    class: "w-full",
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Sending..." } else { "Send reset link" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Login {},
                    "Back to sign in"
                }
            }
        }
    }
}
