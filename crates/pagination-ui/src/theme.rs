use dioxus::prelude::*;

/// Color themes available to the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// All available themes in display order.
pub const ALL_THEMES: &[Theme] = &[Theme::Light, Theme::Dark];

impl Theme {
    /// Internal key used for storage and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a theme key string, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other theme, for toggle controls.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the
/// document root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'light';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: Theme) {
    let key = theme.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={key};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{key}');
        }})();
        "#,
    ));
}
