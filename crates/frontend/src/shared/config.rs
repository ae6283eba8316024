//! Loading of the UI configuration shipped with the page.

use super::dom::script_text;
use contracts::shared::config::UiConfig;
use leptos::prelude::*;

/// `<script id="offer-ui-config" type="application/toml">`
pub const CONFIG_SCRIPT_ID: &str = "offer-ui-config";

/// Embedded defaults, overridden by the page's config script when present.
pub fn load_ui_config() -> UiConfig {
    UiConfig::load(script_text(CONFIG_SCRIPT_ID).as_deref())
}

/// Config provided by `App`; falls back to defaults outside of it.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
