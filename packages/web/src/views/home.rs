//! Landing page.

use dioxus::prelude::*;
use ui::icons::{FaBookOpen, FaClipboardList, FaLayerGroup};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white text-center",

            h1 {
                class: "mb-3 text-neutral-800 font-bold text-[2.25rem]",
                "StudyHall"
            }
            p {
                class: "mb-10 text-neutral-600 text-lg max-w-[480px]",
                "Classes, shared notes, flashcards, and practice tests in one place."
            }

            div {
                class: "flex gap-10 mb-12 text-neutral-700",
                div {
                    class: "flex flex-col items-center gap-2",
                    Icon { icon: FaBookOpen, width: 28, height: 28 }
                    span { class: "text-sm", "Notes" }
                }
                div {
                    class: "flex flex-col items-center gap-2",
                    Icon { icon: FaLayerGroup, width: 28, height: 28 }
                    span { class: "text-sm", "Flashcards" }
                }
                div {
                    class: "flex flex-col items-center gap-2",
                    Icon { icon: FaClipboardList, width: 28, height: 28 }
                    span { class: "text-sm", "Tests" }
                }
            }

            if auth().user.is_some() {
                Link {
                    class: "px-5 py-2.5 rounded bg-primary-500 text-white font-medium no-underline",
                    to: Route::Classes {},
                    "Go to your classes"
                }
            } else {
                div {
                    class: "flex gap-3",
                    Link {
                        class: "px-5 py-2.5 rounded bg-primary-500 text-white font-medium no-underline",
                        to: Route::Register {},
                        "Get started"
                    }
                    Link {
                        class: "px-5 py-2.5 rounded border border-neutral-300 text-neutral-700 no-underline",
                        to: Route::Login {},
                        "Sign in"
                    }
                }
            }
        }
    }
}
