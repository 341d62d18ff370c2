//! Class detail page: class info, add-member form, and the study material
//! creation forms.

use dioxus::prelude::*;
use model::{ClassInfo, Outcome};
use ui::components::{Button, ButtonVariant, Input, OutcomeBanner};
use ui::{get_class_by_id, use_auth, use_classes, Navbar, ServerClient};

use crate::views::raw_form;
use crate::views::study::{FlashcardsForm, NoteForm, TestForm};
use crate::Route;

#[component]
pub fn ClassDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let classes = use_classes();
    let mut class = use_signal(|| Option::<ClassInfo>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut member_outcome = use_signal(|| Option::<Outcome>::None);

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    let class_id = id.clone();
    let _ = use_resource(move || {
        let id = class_id.clone();
        async move {
            let outcome = get_class_by_id(classes, &id).await;
            if outcome.success {
                class.set(outcome.data);
            } else {
                load_error.set(Some(outcome.message));
            }
        }
    });

    let member_class_id = id.clone();
    let handle_add_member = move |evt: FormEvent| {
        evt.prevent_default();
        let mut form = raw_form(&evt);
        form.insert("classId".to_string(), member_class_id.clone());
        spawn(async move {
            let result = actions::classes::add_member(&ServerClient, &form).await;
            if result.success {
                class.set(result.data.clone());
            }
            member_outcome.set(Some(Outcome {
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

            if let Some(err) = load_error() {
                OutcomeBanner { success: false, message: err }
            } else if let Some(c) = class() {
                h2 { class: "mb-1 text-neutral-800 font-semibold text-xl", "{c.title}" }
                p {
                    class: "mb-6 text-neutral-500 text-sm",
                    "{c.subject} · {c.meeting_time} · {c.members.len()} members"
                }

                div {
                    class: "mb-8",
                    Link {
                        class: "text-red-500 text-sm no-underline",
                        to: Route::NewReport { id: c.id.clone() },
                        "Report this class"
                    }
                }

                h3 { class: "mb-3 text-neutral-800 font-semibold", "Add a member" }
                form {
                    onsubmit: handle_add_member,
                    class: "flex flex-col gap-3 max-w-[400px] mb-10",

                    if let Some(o) = member_outcome() {
                        OutcomeBanner { success: o.success, message: o.message }
                    }

                    Input { name: "email", r#type: "email", placeholder: "member@example.com" }
                    Button {
                        variant: ButtonVariant::Outline,
                        r#type: "submit",
                        "Add member"
                    }
                }

                NoteForm { class_id: c.id.clone() }
                FlashcardsForm { class_id: c.id.clone() }
                TestForm { class_id: c.id.clone() }
            } else {
                p { class: "text-neutral-500 text-sm", "Loading..." }
            }
        }
    }
}
