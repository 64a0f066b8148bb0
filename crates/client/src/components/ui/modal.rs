//! Controlled modal overlay.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Accessible label of the close control.
pub const CLOSE_LABEL: &str = "Cerrar modal";

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// Modal - centred panel over a dimmed backdrop.
///
/// Holds no state: the owner decides visibility through `is_open`, and
/// `on_close` fires only from the close control. A closed modal renders
/// nothing at all.
///
/// ```text
/// +---------------------------------------------+
/// |  Title                                  [✕] |
/// |                                             |
/// |  children                                   |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        // Backdrop
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
            // Panel
            div { class: "w-full max-w-xl rounded-2xl bg-white p-6 shadow-lg",
                div { class: "mb-4 flex items-center justify-between",
                    h2 { class: "text-lg font-semibold text-slate-900", "{props.title}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "p-1".to_string(),
                        aria_label: CLOSE_LABEL.to_string(),
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "text-sm text-slate-700", {props.children} }
            }
        }
    }
}
