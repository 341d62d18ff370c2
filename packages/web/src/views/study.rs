//! Creation forms for study materials: note, flashcard set, test.
//!
//! The card and question lists are dynamic rows kept in signals; scalar
//! fields travel through the form map like every other view.

use dioxus::prelude::*;
use model::{CardInput, Outcome, QuestionInput};
use ui::components::{Button, ButtonVariant, Input, OutcomeBanner};
use ui::ServerClient;

use crate::views::raw_form;

#[component]
pub fn NoteForm(class_id: String) -> Element {
    let mut outcome = use_signal(|| Option::<Outcome>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        spawn(async move {
            let result = actions::study::create_note(&ServerClient, &form).await;
            outcome.set(Some(Outcome {
                success: result.success,
                message: result.message,
                data: None,
            }));
        });
    };

    rsx! {
        h3 { class: "mb-3 text-neutral-800 font-semibold", "New note" }
        form {
            onsubmit: handle_submit,
            class: "flex flex-col gap-3 max-w-[400px] mb-10",

            if let Some(o) = outcome() {
                OutcomeBanner { success: o.success, message: o.message }
            }

            input { r#type: "hidden", name: "classId", value: "{class_id}" }
            Input { name: "title", placeholder: "Title" }
            textarea {
                class: "bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none min-h-[96px]",
                name: "content",
                placeholder: "Write your note...",
            }
            Button {
                variant: ButtonVariant::Outline,
                r#type: "submit",
                "Create note"
            }
        }
    }
}

#[component]
pub fn FlashcardsForm(class_id: String) -> Element {
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut cards = use_signal(|| vec![CardInput {
        front: String::new(),
        back: String::new(),
    }]);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        let current = cards();
        spawn(async move {
            let result =
                actions::study::create_flashcard_set(&ServerClient, &form, current).await;
            if result.success {
                cards.set(vec![CardInput {
                    front: String::new(),
                    back: String::new(),
                }]);
            }
            outcome.set(Some(Outcome {
                success: result.success,
                message: result.message,
                data: None,
            }));
        });
    };

    rsx! {
        h3 { class: "mb-3 text-neutral-800 font-semibold", "New flashcard set" }
        form {
            onsubmit: handle_submit,
            class: "flex flex-col gap-3 max-w-[400px] mb-10",

            if let Some(o) = outcome() {
                OutcomeBanner { success: o.success, message: o.message }
            }

            input { r#type: "hidden", name: "classId", value: "{class_id}" }
            Input { name: "title", placeholder: "Set title" }

            for (i, card) in cards().into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "flex gap-2",
                    Input {
                        class: "flex-1",
                        placeholder: "Front",
                        value: card.front.clone(),
                        oninput: move |evt: FormEvent| {
                            cards.with_mut(|c| c[i].front = evt.value());
                        },
                    }
                    Input {
                        class: "flex-1",
                        placeholder: "Back",
                        value: card.back.clone(),
                        oninput: move |evt: FormEvent| {
                            cards.with_mut(|c| c[i].back = evt.value());
                        },
                    }
                }
            }

            div {
                class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        cards.with_mut(|c| c.push(CardInput {
                            front: String::new(),
                            back: String::new(),
                        }));
                    },
                    "Add card"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Create set"
                }
            }
        }
    }
}

#[component]
pub fn TestForm(class_id: String) -> Element {
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut questions = use_signal(|| vec![QuestionInput {
        prompt: String::new(),
        answer: String::new(),
    }]);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = raw_form(&evt);
        let current = questions();
        spawn(async move {
            let result = actions::study::create_test(&ServerClient, &form, current).await;
            if result.success {
                questions.set(vec![QuestionInput {
                    prompt: String::new(),
                    answer: String::new(),
                }]);
            }
            outcome.set(Some(Outcome {
                success: result.success,
                message: result.message,
                data: None,
            }));
        });
    };

    rsx! {
        h3 { class: "mb-3 text-neutral-800 font-semibold", "New test" }
        form {
            onsubmit: handle_submit,
            class: "flex flex-col gap-3 max-w-[400px] mb-10",

            if let Some(o) = outcome() {
                OutcomeBanner { success: o.success, message: o.message }
            }

            input { r#type: "hidden", name: "classId", value: "{class_id}" }
            Input { name: "title", placeholder: "Test title" }
            Input {
                name: "durationMinutes",
                placeholder: "Duration in minutes",
            }

            for (i, question) in questions().into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "flex gap-2",
                    Input {
                        class: "flex-1",
                        placeholder: "Question",
                        value: question.prompt.clone(),
                        oninput: move |evt: FormEvent| {
                            questions.with_mut(|q| q[i].prompt = evt.value());
                        },
                    }
                    Input {
                        class: "flex-1",
                        placeholder: "Answer",
                        value: question.answer.clone(),
                        oninput: move |evt: FormEvent| {
                            questions.with_mut(|q| q[i].answer = evt.value());
                        },
                    }
                }
            }

            div {
                class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        questions.with_mut(|q| q.push(QuestionInput {
                            prompt: String::new(),
                            answer: String::new(),
                        }));
                    },
                    "Add question"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Create test"
                }
            }
        }
    }
}
