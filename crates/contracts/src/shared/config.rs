//! UI configuration for the offer form.
//!
//! An embedded TOML default is always available; the page may ship an override
//! in a `<script id="offer-ui-config" type="application/toml">` element.
//! Sections and keys missing from the override keep their defaults.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid UI config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UiConfig {
    pub alerts: AlertsConfig,
    pub theme: ThemeConfig,
    pub tabs: TabsConfig,
    pub totals: TotalsConfig,
    pub counter: CounterConfig,
    pub multi_product: MultiProductConfig,
    pub textarea: TextareaConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AlertsConfig {
    pub dismiss_after_ms: u32,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub pulse_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            pulse_ms: 500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TabsConfig {
    /// Delay before measuring controls of a freshly added tab.
    pub settle_delay_ms: u32,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TotalsConfig {
    pub rounding_step: f64,
}

impl Default for TotalsConfig {
    fn default() -> Self {
        Self {
            rounding_step: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub warning_ratio: f64,
    /// Used for multi-product descriptions rendered without `maxlength`.
    pub default_max_len: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            warning_ratio: 0.9,
            default_max_len: 200,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MultiProductConfig {
    pub default_rows: usize,
}

impl Default for MultiProductConfig {
    fn default() -> Self {
        Self { default_rows: 3 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextareaConfig {
    pub table_baseline_px: u32,
}

impl Default for TextareaConfig {
    fn default() -> Self {
        Self {
            table_baseline_px: 38,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[alerts]
dismiss_after_ms = 5000

[theme]
storage_key = "theme"
pulse_ms = 500

[tabs]
settle_delay_ms = 100

[totals]
rounding_step = 10.0

[counter]
warning_ratio = 0.9
default_max_len = 200

[multi_product]
default_rows = 3

[textarea]
table_baseline_px = 38
"#;

impl UiConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve the effective configuration.
    ///
    /// An override that fails to parse is logged and ignored.
    pub fn load(override_source: Option<&str>) -> Self {
        if let Some(source) = override_source.filter(|s| !s.trim().is_empty()) {
            match Self::from_toml(source) {
                Ok(config) => {
                    log::info!("Using UI config override from page");
                    return config;
                }
                Err(e) => log::warn!("{}; falling back to defaults", e),
            }
        }

        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("embedded UI config is broken: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = UiConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.alerts.dismiss_after_ms, 5000);
        assert_eq!(config.totals.rounding_step, 10.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = UiConfig::load(Some("[totals]\nrounding_step = 5.0\n"));
        assert_eq!(config.totals.rounding_step, 5.0);
        assert_eq!(config.theme.pulse_ms, 500);
        assert_eq!(config.multi_product.default_rows, 3);
    }

    #[test]
    fn test_broken_override_falls_back() {
        let config = UiConfig::load(Some("[totals\nrounding_step = "));
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_blank_override_ignored() {
        assert_eq!(UiConfig::load(Some("  ")), UiConfig::default());
        assert_eq!(UiConfig::load(None), UiConfig::default());
    }
}
