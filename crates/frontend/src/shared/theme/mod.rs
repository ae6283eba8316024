//! Light/dark theme for the page.
//!
//! The choice is persisted in localStorage and exposed to CSS through
//! `data-bs-theme` on the root element. Until the user toggles by hand the
//! page follows `prefers-color-scheme`.

use super::config::use_ui_config;
use super::icons::icon;
use contracts::shared::theme::{PreferenceStore, Theme, ThemeController};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`; reads and writes are dropped when storage is
/// unavailable.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not persist '{}' to localStorage", key);
            }
        }
    }
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
}

/// Set `data-bs-theme` on `<html>` and `data-theme` on `<body>`.
fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-bs-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    /// True for a short moment after a manual toggle.
    pub pulse: RwSignal<bool>,
    controller: StoredValue<ThemeController<LocalStorageStore>>,
    pulse_ms: u32,
}

impl ThemeContext {
    /// Flip the theme by hand and persist it.
    pub fn toggle(&self) {
        self.controller.update_value(|c| {
            c.toggle();
        });
        let theme = self.controller.with_value(|c| c.theme());
        log::debug!("Theme toggled to {}", theme.as_str());
        self.theme.set(theme);
        apply_theme(theme);

        let pulse = self.pulse;
        pulse.set(true);
        Timeout::new(self.pulse_ms, move || {
            pulse.try_set(false);
        })
        .forget();
    }

    /// Follow the operating system unless the user picked a theme.
    fn follow_system(&self, prefers_dark: bool) {
        let mut changed = None;
        self.controller
            .update_value(|c| changed = c.on_system_change(prefers_dark));
        if let Some(theme) = changed {
            log::debug!("System theme changed to {}", theme.as_str());
            self.theme.set(theme);
            apply_theme(theme);
        }
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let config = use_ui_config();
    let query = dark_scheme_query();

    let controller = ThemeController::init(
        LocalStorageStore,
        &config.theme.storage_key,
        query.as_ref().map(MediaQueryList::matches),
    );
    let initial_theme = controller.theme();
    apply_theme(initial_theme);

    let context = ThemeContext {
        theme: RwSignal::new(initial_theme),
        pulse: RwSignal::new(false),
        controller: StoredValue::new(controller),
        pulse_ms: config.theme.pulse_ms,
    };
    provide_context(context);

    if let Some(query) = query {
        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            context.follow_system(event.matches());
        }) as Box<dyn FnMut(_)>);
        let _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget(); // lives as long as the page
    }

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Sun/moon button that flips between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let shows_sun = move || ctx.theme.get().shows_sun_icon();

    view! {
        <button
            type="button"
            id="themeToggle"
            class=move || {
                if ctx.pulse.get() {
                    "btn btn-outline-secondary theme-toggle theme-pulse"
                } else {
                    "btn btn-outline-secondary theme-toggle"
                }
            }
            title=move || ctx.theme.get().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            <span class="theme-icon-sun" style:display=move || if shows_sun() { "inline-block" } else { "none" }>
                {icon("sun")}
            </span>
            <span class="theme-icon-moon" style:display=move || if shows_sun() { "none" } else { "inline-block" }>
                {icon("moon")}
            </span>
            <span class="theme-toggle__label">{move || ctx.theme.get().toggle_label()}</span>
        </button>
    }
}
