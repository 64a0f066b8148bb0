use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub class: Option<String>,
}

/// Text field for search queries; reports the raw value on every keystroke.
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let base = "w-full rounded-xl border border-slate-200 bg-white px-4 py-2.5 text-sm text-slate-900 placeholder-slate-400 shadow-sm focus:border-slate-400 focus:outline-none focus:ring-2 focus:ring-slate-200";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    };

    rsx! {
        input {
            class,
            r#type: "search",
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e: FormEvent| props.oninput.call(e.value()),
        }
    }
}
