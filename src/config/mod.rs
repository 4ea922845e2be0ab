//! Persistent user preferences: currency display, data location and the
//! advisor endpoint. Credentials never live here; see [`Config::api_key`].

mod manager;

pub use manager::{ConfigError, ConfigManager};

use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::currency::{CurrencyFormat, Grouping};
use crate::utils::paths;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom location of the record blob. Defaults to the app data dir.
    pub data_file: Option<PathBuf>,
    #[serde(default = "Config::default_model")]
    pub advisor_model: String,
    #[serde(default = "Config::default_endpoint")]
    pub advisor_endpoint: String,
    #[serde(default = "Config::default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "Config::default_prompt_transaction_limit")]
    pub prompt_transaction_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency_symbol: Self::default_currency_symbol(),
            data_file: None,
            advisor_model: Self::default_model(),
            advisor_endpoint: Self::default_endpoint(),
            api_key_env: Self::default_api_key_env(),
            prompt_transaction_limit: Self::default_prompt_transaction_limit(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-IN".into()
    }

    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.into()
    }

    pub fn default_endpoint() -> String {
        DEFAULT_ENDPOINT.into()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.into()
    }

    pub fn default_prompt_transaction_limit() -> usize {
        50
    }

    /// Resolves the record blob location, relative to `base` unless overridden.
    pub fn resolve_data_file(&self, base: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) => path.clone(),
            None => paths::data_file_in(base),
        }
    }

    /// Reads the advisor credential from the environment. Blank values count
    /// as missing.
    pub fn api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        let grouping = if self.locale.eq_ignore_ascii_case("en-IN") {
            Grouping::Indian
        } else {
            Grouping::Western
        };
        CurrencyFormat::new(self.currency_symbol.clone(), grouping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.locale, "en-IN");
        assert_eq!(config.prompt_transaction_limit, 50);
        assert_eq!(config.advisor_model, DEFAULT_MODEL);
    }

    #[test]
    fn locale_selects_grouping() {
        let mut config = Config::default();
        assert_eq!(config.currency_format().grouping(), Grouping::Indian);
        config.locale = "en-US".into();
        assert_eq!(config.currency_format().grouping(), Grouping::Western);
    }

    #[test]
    fn api_key_reads_configured_variable() {
        let config = Config {
            api_key_env: "FINTRACK_TEST_KEY_PRESENT".into(),
            ..Config::default()
        };
        env::set_var("FINTRACK_TEST_KEY_PRESENT", "  secret ");
        assert_eq!(config.api_key().as_deref(), Some("secret"));
        env::remove_var("FINTRACK_TEST_KEY_PRESENT");
    }
}
