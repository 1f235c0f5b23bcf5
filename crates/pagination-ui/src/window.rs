//! Page-window computation for the [`Pagination`](crate::components::Pagination)
//! component.
//!
//! Given the current page, the total page count, and a visible-button
//! budget, this module decides which page numbers get their own button,
//! whether the `…` separators and the first/last shortcut buttons are
//! shown, and whether the whole control should be hidden. The
//! computation is pure: the component rebuilds it on every render.

/// How the numbered part of the control is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayType {
    /// A window of numbered page buttons.
    #[default]
    Button,
    /// A "Page X of Y" label instead of numbered buttons.
    Text,
    /// Arrow controls only.
    None,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Button => "button",
            DisplayType::Text => "text",
            DisplayType::None => "none",
        }
    }

    /// Parse a display key string, falling back to Button.
    pub fn from_key(s: &str) -> Self {
        match s {
            "text" => DisplayType::Text,
            "none" => DisplayType::None,
            _ => DisplayType::Button,
        }
    }
}

/// Horizontal placement of the control within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

impl Justify {
    /// CSS class hook on the container element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
        }
    }

    /// Parse a justify key string, falling back to Center.
    pub fn from_key(s: &str) -> Self {
        match s {
            "left" => Justify::Left,
            "right" => Justify::Right,
            _ => Justify::Center,
        }
    }
}

/// Immutable inputs for one window computation.
///
/// `max_buttons` should be an odd integer >= 3; an even value is
/// normalized down to the next smaller odd value. Values below 1 are
/// not rejected but produce an empty window — callers that need strict
/// validation must check before constructing the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub current_page: i64,
    pub total_pages: i64,
    pub max_buttons: i64,
    pub display: DisplayType,
    pub justify: Justify,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            current_page: 1,
            total_pages: 0,
            max_buttons: 5,
            display: DisplayType::default(),
            justify: Justify::default(),
        }
    }
}

/// What the renderer should draw for one configuration.
///
/// When `hidden` is true no other field is meaningful. `page_group`
/// may contain numbers past `total_pages`; the renderer disables
/// those buttons rather than dropping them, so the group keeps a
/// stable width near the end of the range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub hidden: bool,
    pub page_group: Vec<i64>,
    pub show_left_separator: bool,
    pub show_right_separator: bool,
    pub show_first_page_button: bool,
    pub show_last_page_button: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl PaginationConfig {
    /// The odd-normalized button budget actually used for the window.
    pub fn effective_max_buttons(&self) -> i64 {
        if self.max_buttons % 2 == 0 {
            self.max_buttons - 1
        } else {
            self.max_buttons
        }
    }

    /// Compute the window descriptor for this configuration.
    pub fn window(&self) -> PageWindow {
        let hidden = self.current_page < 1 || self.total_pages < 1;
        let is_first_page = self.current_page == 1;
        let is_last_page = self.current_page == self.total_pages;

        // The numbered window only exists in button mode; text and
        // none modes carry the boundary flags and nothing else.
        if self.display != DisplayType::Button {
            return PageWindow {
                hidden,
                is_first_page,
                is_last_page,
                ..PageWindow::default()
            };
        }

        let max_buttons = self.effective_max_buttons();
        let adjacent = max_buttons / 2;
        let left_most = self.current_page - adjacent;
        let right_most = self.current_page + adjacent;

        let start = if left_most < 1 {
            1
        } else if right_most > self.total_pages {
            self.total_pages - max_buttons + 1
        } else {
            left_most
        };

        let page_group: Vec<i64> = (0..max_buttons.max(0)).map(|i| start + i).collect();

        let show_left_separator = left_most > 2;
        let show_right_separator = right_most < self.total_pages - 1;

        PageWindow {
            hidden,
            page_group,
            show_left_separator,
            show_right_separator,
            show_first_page_button: show_left_separator || left_most == 2,
            show_last_page_button: show_right_separator || right_most == self.total_pages - 1,
            is_first_page,
            is_last_page,
        }
    }
}
