//! Storefront configuration.
//!
//! Loaded from an optional TOML or JSON file (picked by extension), then overridden
//! by `STOREFRONT_*` environment variables. Every field has a default, so running
//! without any configuration gives the seed catalog on a 32-slot mailbox.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::composer::CurrencyPolicy;
use crate::model::{default_products, Product};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Mailbox capacity of each actor
    pub channel_buffer: usize,

    /// First segment of every order id
    pub order_id_prefix: String,

    /// How checkout treats carts priced in several currencies
    pub currency_policy: CurrencyPolicy,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Catalog contents
    pub products: Vec<Product>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            order_id_prefix: "order".to_string(),
            currency_policy: CurrencyPolicy::default(),
            log_filter: "info".to_string(),
            products: default_products(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from `path` (if any) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file; `.json` files as JSON, anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else {
            Self::from_toml_str(&content).map_err(|e| match e {
                ConfigError::Parse { message, .. } => ConfigError::Parse {
                    path: path.to_path_buf(),
                    message,
                },
                other => other,
            })
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }

    /// Apply `STOREFRONT_*` overrides, reading variables through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(buffer) = lookup("STOREFRONT_CHANNEL_BUFFER") {
            self.channel_buffer = buffer
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_CHANNEL_BUFFER".to_string()))?;
        }

        if let Some(prefix) = lookup("STOREFRONT_ORDER_PREFIX") {
            self.order_id_prefix = prefix;
        }

        if let Some(policy) = lookup("STOREFRONT_CURRENCY_POLICY") {
            self.currency_policy = policy
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_CURRENCY_POLICY".to_string()))?;
        }

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            self.log_filter = filter;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue("channel_buffer".to_string()));
        }
        if self.order_id_prefix.is_empty() {
            return Err(ConfigError::InvalidValue("order_id_prefix".to_string()));
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();

        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.order_id_prefix, "order");
        assert_eq!(config.currency_policy, CurrencyPolicy::FirstItem);
        assert_eq!(config.products.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_file_keeps_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            order_id_prefix = "web"
            currency_policy = "reject-mixed"

            [[products]]
            id = "mug"
            name = "Mug"
            price = 9.5
            currency = "USD"
            "#,
        )
        .unwrap();

        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.order_id_prefix, "web");
        assert_eq!(config.currency_policy, CurrencyPolicy::RejectMixed);
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].price, dec!(9.5));
    }

    #[test]
    fn test_toml_parse_error() {
        let err = StorefrontConfig::from_toml_str("channel_buffer = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("STOREFRONT_CHANNEL_BUFFER", "8"),
            ("STOREFRONT_ORDER_PREFIX", "kiosk"),
            ("STOREFRONT_CURRENCY_POLICY", "reject-mixed"),
            ("STOREFRONT_LOG", "debug"),
        ]);
        let mut config = StorefrontConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.order_id_prefix, "kiosk");
        assert_eq!(config.currency_policy, CurrencyPolicy::RejectMixed);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_env_override() {
        let mut config = StorefrontConfig::default();
        let err = config
            .apply_overrides(|key| (key == "STOREFRONT_CURRENCY_POLICY").then(|| "strict".to_string()))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "STOREFRONT_CURRENCY_POLICY"));
    }

    #[test]
    fn test_zero_channel_buffer_is_invalid() {
        let config = StorefrontConfig {
            channel_buffer: 0,
            ..StorefrontConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = StorefrontConfig::from_file(Path::new("/nonexistent/storefront.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
