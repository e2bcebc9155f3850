use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replaces the built-in catalog when present.
    #[serde(default)]
    pub products: Option<Vec<ProductConfig>>,
}

/// Display and loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Prefix for rendered prices (default: "₹").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings. `RUST_LOG` still wins over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// A catalog entry as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: String,
    pub title: String,
    /// Price in minor currency units.
    pub price: u64,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            logging: LoggingConfig::default(),
            products: None,
        }
    }
}

impl Config {
    /// Catalog to run with: the configured products, or the built-in one.
    ///
    /// Call after `validate()`.
    pub fn catalog(&self) -> Catalog {
        match &self.products {
            Some(products) => Catalog::from_products(
                products
                    .iter()
                    .map(|p| Product::new(p.id.as_str(), p.title.as_str(), p.price))
                    .collect(),
            ),
            None => Catalog::builtin(),
        }
    }
}
