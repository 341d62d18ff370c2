//! Small shared form components.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "px-4 py-2 rounded bg-primary-500 text-white font-medium \
                 hover:bg-primary-600 disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonVariant::Outline => {
                "px-4 py-2 rounded border border-neutral-300 text-neutral-700 \
                 hover:bg-neutral-50 disabled:opacity-50"
            }
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] name: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "bg-white border border-neutral-300 rounded px-3 py-2 text-sm \
                    text-neutral-800 outline-none focus:border-primary-500 {class}",
            r#type: r#type,
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(
    #[props(default = "".to_string())] html_for: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "text-sm font-medium text-neutral-700",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Inline outcome banner shown under a form after submission.
#[component]
pub fn OutcomeBanner(success: bool, message: String) -> Element {
    let class = if success {
        "px-2.5 py-2.5 bg-green-50 border border-green-200 rounded text-green-700 text-[0.8125rem]"
    } else {
        "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]"
    };
    rsx! {
        div { class: "{class}", "{message}" }
    }
}
