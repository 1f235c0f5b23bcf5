use dioxus::prelude::*;

use crate::components::button::Button;
use crate::window::{DisplayType, Justify, PaginationConfig};

/// Page navigation controls with a windowed group of numbered buttons.
///
/// The widget never mutates its own page: every control emits the
/// target page through `on_change_page` and the host decides what to
/// store. Renders nothing when `page` or `pages` is below 1.
#[component]
pub fn Pagination(
    /// Current page, 1-based.
    page: i64,
    /// Total number of pages.
    pages: i64,
    /// Visible-button budget, odd and >= 3. Even values are
    /// normalized down to the next smaller odd value.
    #[props(default = 5)]
    max_buttons: i64,
    /// Numbered buttons, a "Page X of Y" label, or arrows only.
    #[props(default)]
    display: DisplayType,
    /// Horizontal placement within the container.
    #[props(default)]
    justify: Justify,
    /// Called with the requested target page on any control click.
    on_change_page: EventHandler<i64>,
) -> Element {
    let config = PaginationConfig {
        current_page: page,
        total_pages: pages,
        max_buttons,
        display,
        justify,
    };
    let window = config.window();

    if window.hidden {
        return rsx! {};
    }

    let is_button = display == DisplayType::Button;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination-container {justify.as_str()}",
            div { class: "pagination-group",
                // In button mode the numbered shortcuts replace the
                // first/last arrows.
                Button {
                    visible: !is_button,
                    disabled: window.is_first_page,
                    onclick: move |_| on_change_page.call(1),
                    span { class: "page-glyph large", "\u{ab}" }
                }
                Button {
                    disabled: window.is_first_page,
                    onclick: move |_| on_change_page.call(page - 1),
                    span { class: "page-glyph large", "\u{2039}" }
                }
                if display == DisplayType::Text {
                    span { class: "current-page", "Page {page} of {pages}" }
                }
                if is_button {
                    div { class: "button-group",
                        Button {
                            visible: window.show_first_page_button,
                            disabled: window.is_first_page,
                            onclick: move |_| on_change_page.call(1),
                            span { class: "page-glyph", "1" }
                        }
                        if window.show_left_separator {
                            span { class: "page-glyph separator", "\u{2026}" }
                        }
                        for p in window.page_group.iter().copied() {
                            Button {
                                key: "{p}",
                                selected: p == page,
                                disabled: p > pages,
                                onclick: move |_| on_change_page.call(p),
                                span { class: "page-glyph", "{p}" }
                            }
                        }
                        if window.show_right_separator {
                            span { class: "page-glyph separator", "\u{2026}" }
                        }
                        Button {
                            visible: window.show_last_page_button,
                            disabled: window.is_last_page,
                            onclick: move |_| on_change_page.call(pages),
                            span { class: "page-glyph", "{pages}" }
                        }
                    }
                }
                Button {
                    disabled: window.is_last_page,
                    onclick: move |_| on_change_page.call(page + 1),
                    span { class: "page-glyph large", "\u{203a}" }
                }
                Button {
                    visible: !is_button,
                    disabled: window.is_last_page,
                    onclick: move |_| on_change_page.call(pages),
                    span { class: "page-glyph large", "\u{bb}" }
                }
            }
        }
    }
}
