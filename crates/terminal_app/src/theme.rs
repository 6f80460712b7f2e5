//! Theme selection and persistence for the terminal page.
//!
//! Themes are expressed purely through a class on `<body>`; stylesheets key
//! their palettes off `theme-<name>`. The stored preference is the bare theme
//! name so hand-edited values keep working.

use platform_prefs::{PrefsStore, THEME_PREF_KEY};

/// Theme applied on first visit, before the user has picked anything.
pub(crate) const DEFAULT_THEME: &str = "tokyonight";

/// Themes offered by the toolbar selector.
pub(crate) const THEME_CHOICES: [&str; 5] = ["tokyonight", "matrix", "dracula", "gruvbox", "default"];

/// Class that `<body>` should carry for a theme. The `default` theme clears
/// the class entirely so the stylesheet's base palette applies.
pub(crate) fn body_class_for(name: &str) -> String {
    if name == "default" {
        String::new()
    } else {
        format!("theme-{name}")
    }
}

/// Loads the saved theme, seeding the store with [`DEFAULT_THEME`] on first
/// visit so later sessions see an explicit choice.
pub(crate) fn load_initial_theme(store: &dyn PrefsStore) -> String {
    match store.load_raw(THEME_PREF_KEY) {
        Some(name) => name,
        None => {
            if let Err(err) = store.save_raw(THEME_PREF_KEY, DEFAULT_THEME) {
                leptos::logging::warn!("failed to persist default theme: {err}");
            }
            DEFAULT_THEME.to_owned()
        }
    }
}

/// Saves the chosen theme name.
pub(crate) fn persist_theme(store: &dyn PrefsStore, name: &str) -> Result<(), String> {
    store.save_raw(THEME_PREF_KEY, name)
}

/// Swaps the `<body>` class to the theme's class. No-op outside the browser.
pub(crate) fn apply_theme(name: &str) {
    let class = body_class_for(name);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            body.set_class_name(&class);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = class;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_prefs::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_visit_seeds_the_default_theme() {
        let store = MemoryPrefsStore::default();
        assert_eq!(load_initial_theme(&store), "tokyonight");
        assert_eq!(store.load_raw(THEME_PREF_KEY).as_deref(), Some("tokyonight"));
    }

    #[test]
    fn saved_theme_survives_a_new_session() {
        let store = MemoryPrefsStore::default();
        persist_theme(&store, "matrix").unwrap();
        assert_eq!(load_initial_theme(&store), "matrix");
        assert_eq!(body_class_for("matrix"), "theme-matrix");
    }

    #[test]
    fn default_theme_clears_the_body_class() {
        assert_eq!(body_class_for("default"), "");
        assert_eq!(body_class_for("gruvbox"), "theme-gruvbox");
    }

    #[test]
    fn apply_theme_is_inert_off_wasm() {
        for choice in THEME_CHOICES {
            apply_theme(choice);
        }
    }
}
