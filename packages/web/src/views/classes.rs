//! Class list page: the user's classes plus a create-class form.

use dioxus::prelude::*;
use model::Outcome;
use ui::components::{Button, ButtonVariant, Input, OutcomeBanner};
use ui::{load_classes, use_auth, use_classes, Navbar, ServerClient};

use crate::views::raw_form;
use crate::Route;

#[component]
pub fn Classes() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let classes = use_classes();
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut submitting = use_signal(|| false);

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    let _ = use_resource(move || async move {
        load_classes(classes).await;
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        spawn(async move {
            submitting.set(true);
            let result = actions::classes::create_class(&ServerClient, &form).await;
            submitting.set(false);
            if result.success {
                // The list is stale; reload it from the server.
                load_classes(classes).await;
            }
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
            class: "max-w-[720px] mx-auto p-8",

            h2 { class: "mb-4 text-neutral-800 font-semibold text-xl", "Your classes" }

            if classes().loading {
                p { class: "text-neutral-500 text-sm", "Loading..." }
            } else if let Some(err) = classes().error {
                OutcomeBanner { success: false, message: err }
            } else if classes().classes.is_empty() {
                p { class: "text-neutral-500 text-sm", "No classes yet. Create one below." }
            }

            ul {
                class: "list-none p-0 mb-10",
                for class in classes().classes {
                    li {
                        key: "{class.id}",
                        class: "border border-neutral-200 rounded p-4 mb-2 flex items-center justify-between",
                        div {
                            div { class: "font-medium text-neutral-800", "{class.title}" }
                            div {
                                class: "text-sm text-neutral-500",
                                "{class.subject} · {class.meeting_time} · {class.members.len()} members"
                            }
                        }
                        Link {
                            class: "text-primary-500 text-sm no-underline",
                            to: Route::ClassDetail { id: class.id.clone() },
                            "Open"
                        }
                    }
                }
            }

            h3 { class: "mb-3 text-neutral-800 font-semibold", "Create a class" }

            form {
                onsubmit: handle_create,
                class: "flex flex-col gap-3 max-w-[400px]",

                if let Some(o) = outcome() {
                    OutcomeBanner { success: o.success, message: o.message }
                }

                Input { name: "title", placeholder: "Title (e.g. Linear Algebra)" }
                Input { name: "subject", placeholder: "Subject" }
                Input { name: "meetingTime", placeholder: "Meeting time, e.g. Mon 09:00" }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating..." } else { "Create class" }
                }
            }
        }
    }
}
