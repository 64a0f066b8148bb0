use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Subtle,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Subtle => "bg-slate-100 text-slate-700 hover:bg-slate-200 focus:ring-slate-300",
            ButtonVariant::Ghost => "bg-transparent text-slate-500 hover:bg-slate-100 hover:text-slate-700 focus:ring-slate-300",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub aria_label: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = "inline-flex items-center justify-center rounded-lg px-3 py-1.5 text-sm font-medium transition-colors focus:outline-none focus:ring-2";
    let variant = props.variant.unwrap_or_default().class();

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {variant} {extra}"),
        _ => format!("{base} {variant}"),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            aria_label: props.aria_label,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
