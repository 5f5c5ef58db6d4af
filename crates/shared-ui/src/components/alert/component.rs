use dioxus::prelude::*;

/// Tone of an inline message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Error => "error",
        }
    }

    // Errors interrupt screen readers, the rest are announced politely.
    fn role(&self) -> &'static str {
        match self {
            AlertVariant::Error => "alert",
            AlertVariant::Info | AlertVariant::Success => "status",
        }
    }
}

/// Inline message block for form errors and confirmations.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", variant.role(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}
