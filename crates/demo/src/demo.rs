use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLightbulb;
use dioxus_free_icons::Icon;
use pagination_ui::components::{Container, FormSelect, Pagination};
use pagination_ui::theme::{set_theme, Theme};
use pagination_ui::window::{DisplayType, Justify};

use crate::flash::use_flash;

const TOTAL_PAGES: i64 = 50;

/// How long the current-page readout stays highlighted after a change.
const FLASH_MS: u32 = 500;

pub const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("button", "Button"),
    ("text", "Text"),
    ("none", "None"),
];

pub const JUSTIFY_OPTIONS: &[(&str, &str)] = &[
    ("left", "Left"),
    ("center", "Center"),
    ("right", "Right"),
];

pub const MAX_BUTTON_OPTIONS: &[i64] = &[3, 5, 7, 9];

/// Demo page exercising every Pagination parameter.
#[component]
pub fn PaginationDemo() -> Element {
    let mut page = use_signal(|| 1i64);
    let mut max_buttons = use_signal(|| 5i64);
    let mut display = use_signal(DisplayType::default);
    let mut justify = use_signal(Justify::default);
    let mut theme = use_signal(Theme::default);
    let mut flash = use_flash(FLASH_MS);

    // The widget reports the requested page; clamping is the host's
    // job.
    let on_change_page = move |target: i64| {
        let target = target.clamp(1, TOTAL_PAGES);
        tracing::debug!(page = target, "page change requested");
        page.set(target);
        flash.trigger();
    };

    let toggle_theme = move |_| {
        let next = theme.read().toggled();
        theme.set(next);
        set_theme(next);
    };

    let value_class = if flash.active() {
        "page-value updated"
    } else {
        "page-value"
    };
    let current_theme = *theme.read();
    let is_button_mode = *display.read() == DisplayType::Button;

    rsx! {
        div { class: "theme-toggle",
            button {
                class: "lightbulb",
                "data-on": if current_theme == Theme::Dark { "true" } else { "false" },
                onclick: toggle_theme,
                Icon { icon: LdLightbulb }
            }
        }
        Container { theme: current_theme,
            div { class: "value-container",
                "Current page: "
                span { class: value_class, "{page}" }
            }
            Pagination {
                page: *page.read(),
                pages: TOTAL_PAGES,
                max_buttons: *max_buttons.read(),
                display: *display.read(),
                justify: *justify.read(),
                on_change_page,
            }
            div { class: "parameters-container",
                FormSelect {
                    label: "Type:",
                    value: display.read().as_str().to_string(),
                    onchange: move |evt: Event<FormData>| {
                        display.set(DisplayType::from_key(&evt.value()));
                    },
                    for (value, label) in TYPE_OPTIONS.iter().copied() {
                        option {
                            value: value,
                            selected: *display.read() == DisplayType::from_key(value),
                            "{label}"
                        }
                    }
                }
                FormSelect {
                    label: "Justify:",
                    value: justify.read().as_str().to_string(),
                    onchange: move |evt: Event<FormData>| {
                        justify.set(Justify::from_key(&evt.value()));
                    },
                    for (value, label) in JUSTIFY_OPTIONS.iter().copied() {
                        option {
                            value: value,
                            selected: *justify.read() == Justify::from_key(value),
                            "{label}"
                        }
                    }
                }
                if is_button_mode {
                    FormSelect {
                        label: "Max Buttons:",
                        value: max_buttons.read().to_string(),
                        onchange: move |evt: Event<FormData>| {
                            if let Ok(count) = evt.value().parse::<i64>() {
                                max_buttons.set(count);
                            }
                        },
                        for count in MAX_BUTTON_OPTIONS.iter().copied() {
                            option {
                                value: "{count}",
                                selected: count == *max_buttons.read(),
                                "{count}"
                            }
                        }
                    }
                }
            }
        }
    }
}
