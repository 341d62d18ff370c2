use dioxus::prelude::*;

use crate::{use_auth, Icon, LogoutButton};
use dioxus_free_icons::icons::fa_solid_icons::FaGraduationCap;

#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "flex items-center justify-between px-6 py-3 border-b border-neutral-200 bg-white",
            div {
                class: "flex items-center gap-2 font-semibold text-neutral-800",
                Icon { icon: FaGraduationCap, width: 18, height: 18 }
                "StudyHall"
            }
            div {
                class: "flex items-center gap-4 text-sm",
                {children}
                if let Some(user) = auth().user {
                    span { class: "text-neutral-600", "{user.display_name()}" }
                    LogoutButton {
                        class: "px-3 py-1.5 rounded border border-neutral-300 text-neutral-700 hover:bg-neutral-50",
                    }
                }
            }
        }
    }
}
