//! Report submission page for a class.

use dioxus::prelude::*;
use model::Outcome;
use ui::components::{Button, ButtonVariant, Input, OutcomeBanner};
use ui::{use_auth, Navbar, ServerClient};

use crate::views::raw_form;
use crate::Route;

#[component]
pub fn NewReport(id: String) -> Element {
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
            let result = actions::reports::create_report(&ServerClient, &form).await;
            submitting.set(false);
            outcome.set(Some(Outcome {
                success: result.success,
                message: result.message,
                data: None,
            }));
        });
    };

    rsx! {
        Navbar {}
        div {
            class: "max-w-[480px] mx-auto p-8",

            h2 { class: "mb-2 text-neutral-800 font-semibold text-xl", "Report content" }
            p {
                class: "mb-6 text-neutral-500 text-sm",
                "Tell us what's wrong. Reports are reviewed by a moderator."
            }

            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3",

                if let Some(o) = outcome() {
                    OutcomeBanner { success: o.success, message: o.message }
                }

                input { r#type: "hidden", name: "targetId", value: "{id}" }

                select {
                    class: "bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none",
                    name: "reportType",
                    option { value: "class", "Class" }
                    option { value: "note", "Note" }
                    option { value: "flashcards", "Flashcards" }
                    option { value: "test", "Test" }
                    option { value: "user", "User" }
                }

                Input { name: "title", placeholder: "Short summary" }

                textarea {
                    class: "bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none min-h-[120px]",
                    name: "description",
                    placeholder: "Describe the problem (at least 10 characters)",
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit report" }
                }
            }
        }
    }
}
