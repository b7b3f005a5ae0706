use dioxus::prelude::*;

/// Color mode of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to the `data-theme` attribute and the theme cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored mode, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Shared theme state provided as context.
///
/// The header toggle reads and flips this signal. Changes call [`set_theme`]
/// to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            mode: Signal::new(ThemeMode::default()),
        }
    }

    /// Flip between light and dark and apply the result to the document.
    pub fn toggle(&mut self) {
        let next = self.mode.read().toggled();
        self.mode.set(next);
        set_theme(next.as_str());
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from a cookie, applies it to the document root
/// and syncs `state` with it. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    let mut state = use_context::<ThemeState>();

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(
                r#"
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'light';
                document.documentElement.setAttribute('data-theme', theme);
                dioxus.send(theme);
                "#,
            );
            if let Ok(stored) = eval.recv::<String>().await {
                state.mode.set(ThemeMode::from_key(&stored));
            }
        });
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
