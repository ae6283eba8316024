//! Light/dark theme state.
//!
//! The controller owns the current theme and talks to persistent storage
//! through [`PreferenceStore`], so it runs the same against `localStorage`
//! in the browser and an in-memory map in tests.

/// Suffix of the marker key written when the user picks a theme by hand.
const EXPLICIT_SUFFIX: &str = "_explicit";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored value and `data-bs-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle offers the opposite theme: a sun in dark mode, a moon in
    /// light mode.
    pub fn shows_sun_icon(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Modalità chiara",
            Theme::Light => "Modalità scura",
        }
    }
}

/// Key/value persistence for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    storage_key: String,
    theme: Theme,
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial theme: stored preference, then system preference,
    /// then light. The resolved value is written back to storage.
    pub fn init(mut store: S, storage_key: &str, system_prefers_dark: Option<bool>) -> Self {
        let stored = store.get(storage_key).and_then(|s| Theme::parse(&s));
        let explicit_key = format!("{}{}", storage_key, EXPLICIT_SUFFIX);
        let explicit = store.get(&explicit_key).as_deref() == Some("1");

        let theme = stored
            .or_else(|| system_prefers_dark.map(Theme::from_system))
            .unwrap_or_default();
        store.set(storage_key, theme.as_str());

        Self {
            store,
            storage_key: storage_key.to_string(),
            theme,
            explicit,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Flip the theme by hand. From now on system changes are ignored.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.explicit = true;
        self.store.set(&self.storage_key, self.theme.as_str());
        let explicit_key = format!("{}{}", self.storage_key, EXPLICIT_SUFFIX);
        self.store.set(&explicit_key, "1");
        self.theme
    }

    /// React to a `prefers-color-scheme` change. Returns the new theme when it
    /// was applied.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        if next == self.theme {
            return None;
        }
        self.theme = next;
        self.store.set(&self.storage_key, next.as_str());
        Some(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_system_dark_without_stored_preference() {
        let ctrl = ThemeController::init(MemoryStore::default(), "theme", Some(true));
        assert_eq!(ctrl.theme(), Theme::Dark);
        assert_eq!(ctrl.store().get("theme").as_deref(), Some("dark"));
        assert!(!ctrl.is_explicit());
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        let mut store = MemoryStore::default();
        store.set("theme", "light");
        let ctrl = ThemeController::init(store, "theme", Some(true));
        assert_eq!(ctrl.theme(), Theme::Light);
    }

    #[test]
    fn test_defaults_to_light() {
        let ctrl = ThemeController::init(MemoryStore::default(), "theme", None);
        assert_eq!(ctrl.theme(), Theme::Light);

        let mut store = MemoryStore::default();
        store.set("theme", "sepia");
        let ctrl = ThemeController::init(store, "theme", Some(false));
        assert_eq!(ctrl.theme(), Theme::Light);
    }

    #[test]
    fn test_system_change_ignored_after_manual_toggle() {
        let mut ctrl = ThemeController::init(MemoryStore::default(), "theme", Some(true));
        assert_eq!(ctrl.toggle(), Theme::Light);
        assert_eq!(ctrl.store().get("theme").as_deref(), Some("light"));

        assert_eq!(ctrl.on_system_change(true), None);
        assert_eq!(ctrl.theme(), Theme::Light);
    }

    #[test]
    fn test_system_change_followed_without_manual_choice() {
        let mut ctrl = ThemeController::init(MemoryStore::default(), "theme", Some(false));
        assert_eq!(ctrl.on_system_change(true), Some(Theme::Dark));
        assert_eq!(ctrl.theme(), Theme::Dark);
        assert_eq!(ctrl.on_system_change(true), None);
    }

    #[test]
    fn test_explicit_choice_survives_reload() {
        let mut ctrl = ThemeController::init(MemoryStore::default(), "theme", Some(false));
        ctrl.toggle();
        let store = ctrl.store;

        let mut reloaded = ThemeController::init(store, "theme", Some(false));
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert!(reloaded.is_explicit());
        assert_eq!(reloaded.on_system_change(false), None);
    }

    #[test]
    fn test_toggle_chrome() {
        assert!(Theme::Dark.shows_sun_icon());
        assert!(!Theme::Light.shows_sun_icon());
        assert_eq!(Theme::Dark.toggle_label(), "Modalità chiara");
        assert_eq!(Theme::Light.toggle_label(), "Modalità scura");
    }
}
