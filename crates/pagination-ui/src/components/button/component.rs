use dioxus::prelude::*;

/// Visual variant for page buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Round page-number button.
    #[default]
    Circle,
    /// Chromeless button for toolbar-style controls.
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Circle => "circle",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// A page control button.
///
/// `selected` marks the current page without disabling it; `visible`
/// removes the button from the tree entirely, which keeps call sites
/// declarative when a control only applies to some display modes.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub selected: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = true)]
    pub visible: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "page-button",
            "data-style": props.variant.class(),
            "data-selected": if props.selected { "true" } else { "false" },
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
