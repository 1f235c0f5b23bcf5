//! Pagination widgets for Dioxus.
//!
//! The [`window`] module holds the pure page-window computation; the
//! [`components`] module renders it. Hosts own the current page and
//! receive change requests through an event handler.

pub mod components;
pub mod theme;
pub mod window;

pub use components::*;
pub use theme::{set_theme, Theme, ThemeSeed};
pub use window::{DisplayType, Justify, PageWindow, PaginationConfig};
