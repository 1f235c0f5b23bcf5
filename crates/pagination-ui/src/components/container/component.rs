use dioxus::prelude::*;

use crate::theme::Theme;

/// A themed content container.
///
/// `theme` overrides the document theme for this subtree, so a host
/// page can show a dark container on a light page and vice versa.
#[component]
pub fn Container(
    #[props(default)] theme: Theme,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "container", "data-theme": theme.as_str(),
            {children}
        }
    }
}
