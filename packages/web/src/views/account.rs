//! Account profile page: edit name, contact, and bio fields.

use dioxus::prelude::*;
use model::Outcome;
use ui::components::{Button, ButtonVariant, Input, Label, OutcomeBanner};
use ui::{set_user, use_auth, Navbar, ServerClient};

use crate::views::raw_form;
use crate::Route;

#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut submitting = use_signal(|| false);

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        spawn(async move {
            submitting.set(true);
            let result = actions::auth::update_account(&ServerClient, &form).await;
            submitting.set(false);
            if result.success {
                if let Some(user) = result.data.clone() {
                    set_user(auth, user);
                }
            }
            outcome.set(Some(Outcome {
                success: result.success,
                message: result.message,
                data: None,
            }));
        });
    };

    let user = auth().user;

    rsx! {
        Navbar {}
        div {
            class: "max-w-[480px] mx-auto p-8",

            h2 { class: "mb-6 text-neutral-800 font-semibold text-xl", "Your profile" }

            if let Some(user) = user {
                form {
                    onsubmit: handle_submit,
                    class: "flex flex-col gap-3",

                    if let Some(o) = outcome() {
                        OutcomeBanner { success: o.success, message: o.message }
                    }

                    Label { html_for: "account-first-name", "First name" }
                    Input {
                        id: "account-first-name",
                        name: "firstName",
                        value: user.first_name.clone(),
                    }

                    Label { html_for: "account-last-name", "Last name" }
                    Input {
                        id: "account-last-name",
                        name: "lastName",
                        value: user.last_name.clone(),
                    }

                    Label { html_for: "account-phone", "Phone (optional)" }
                    Input {
                        id: "account-phone",
                        name: "phone",
                        value: user.phone.clone().unwrap_or_default(),
                    }

                    Label { html_for: "account-website", "Website (optional)" }
                    Input {
                        id: "account-website",
                        name: "website",
                        placeholder: "https://",
                        value: user.website.clone().unwrap_or_default(),
                    }

                    Label { html_for: "account-bio", "Bio (optional)" }
                    textarea {
                        id: "account-bio",
                        class: "bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none min-h-[96px]",
                        name: "bio",
                        value: "{user.bio.clone().unwrap_or_default()}",
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save profile" }
                    }
                }

                p {
                    class: "mt-6 text-sm text-neutral-600",
                    Link {
                        class: "text-primary-500 no-underline",
                        to: Route::UpdatePassword { token: String::new() },
                        "Change password"
                    }
                }
            } else {
                p { class: "text-neutral-500 text-sm", "Loading..." }
            }
        }
    }
}
