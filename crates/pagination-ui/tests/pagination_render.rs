//! Server-side render tests for the Pagination component.
//!
//! Each case mounts a small harness app in a `VirtualDom` and asserts
//! on the rendered HTML, so the window descriptor and the rsx body are
//! exercised together.

use dioxus::prelude::*;
use pagination_ui::components::Pagination;
use pagination_ui::window::DisplayType;
use pretty_assertions::assert_eq;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn button_count(html: &str) -> usize {
    html.matches("<button").count()
}

fn disabled_count(html: &str) -> usize {
    html.matches("disabled").count()
}

fn selected_count(html: &str) -> usize {
    html.matches(r#"data-selected="true""#).count()
}

#[test]
fn centered_window_renders_full_group() {
    fn app() -> Element {
        rsx! {
            Pagination { page: 10, pages: 50, max_buttons: 5, on_change_page: move |_| {} }
        }
    }
    let html = render(app);

    // prev + shortcut 1 + five window buttons + shortcut 50 + next
    assert_eq!(button_count(&html), 9);
    for page in 8..=12 {
        assert!(html.contains(&format!(">{page}</span>")), "missing page {page}");
    }
    assert_eq!(html.matches('\u{2026}').count(), 2);
    assert_eq!(selected_count(&html), 1);
    assert_eq!(disabled_count(&html), 0);
}

#[test]
fn first_page_disables_prev_only() {
    fn app() -> Element {
        rsx! {
            Pagination { page: 1, pages: 50, max_buttons: 5, on_change_page: move |_| {} }
        }
    }
    let html = render(app);

    // prev + window [1..5] + shortcut 50 + next; no first shortcut,
    // no left separator.
    assert_eq!(button_count(&html), 8);
    assert_eq!(html.matches('\u{2026}').count(), 1);
    assert_eq!(disabled_count(&html), 1);
    assert_eq!(selected_count(&html), 1);
}

#[test]
fn out_of_range_buttons_render_disabled() {
    fn app() -> Element {
        rsx! {
            Pagination { page: 2, pages: 3, max_buttons: 5, on_change_page: move |_| {} }
        }
    }
    let html = render(app);

    // Window [1..5] keeps its width; 4 and 5 are past the last page.
    assert!(html.contains(">4</span>"));
    assert!(html.contains(">5</span>"));
    assert_eq!(disabled_count(&html), 2);
    // Page 2 is selected, not disabled.
    assert_eq!(selected_count(&html), 1);
    assert_eq!(html.matches('\u{2026}').count(), 0);
}

#[test]
fn text_mode_renders_label_and_arrows() {
    fn app() -> Element {
        rsx! {
            Pagination {
                page: 7,
                pages: 50,
                display: DisplayType::Text,
                on_change_page: move |_| {},
            }
        }
    }
    let html = render(app);

    assert!(html.contains("Page 7 of 50"));
    // first, prev, next, last
    assert_eq!(button_count(&html), 4);
    assert!(!html.contains("button-group"));
}

#[test]
fn none_mode_renders_arrows_only() {
    fn app() -> Element {
        rsx! {
            Pagination {
                page: 7,
                pages: 50,
                display: DisplayType::None,
                on_change_page: move |_| {},
            }
        }
    }
    let html = render(app);

    assert_eq!(button_count(&html), 4);
    assert!(!html.contains("Page "));
    assert!(!html.contains("button-group"));
}

#[test]
fn hidden_control_renders_nothing() {
    fn zero_page() -> Element {
        rsx! {
            Pagination { page: 0, pages: 50, on_change_page: move |_| {} }
        }
    }
    fn zero_pages() -> Element {
        rsx! {
            Pagination { page: 1, pages: 0, on_change_page: move |_| {} }
        }
    }
    assert_eq!(render(zero_page), "");
    assert_eq!(render(zero_pages), "");
}

#[test]
fn justify_class_reaches_container() {
    fn app() -> Element {
        rsx! {
            Pagination {
                page: 1,
                pages: 2,
                justify: pagination_ui::window::Justify::Right,
                on_change_page: move |_| {},
            }
        }
    }
    let html = render(app);
    assert!(html.contains("pagination-container right"));
}
