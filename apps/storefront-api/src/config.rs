//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_PORT=9000                                               │
//! │     STOREFRONT_TAX_RATE_BPS=1800                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STOREFRONT_CONFIG, else ./storefront.toml                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, 18% GST, free delivery above ₹2000                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [pricing]
//! tax_rate_bps = 1800
//! free_delivery_threshold = 2000
//! delivery_fee = 50
//!
//! [delivery]
//! simulated_delay_ms = 1000
//!
//! [age_gate]
//! minimum_age = 21
//!
//! [carts]
//! max_sessions = 10000
//! idle_timeout_secs = 1800
//! ```

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use spirit_core::age_gate::DEFAULT_MINIMUM_AGE;
use spirit_core::pricing::{
    DEFAULT_DELIVERY_FEE, DEFAULT_FREE_DELIVERY_THRESHOLD, DEFAULT_TAX_RATE_BPS,
};
use spirit_core::validation::validate_tax_rate_bps;
use spirit_core::{Money, PricingPolicy, TaxRate};
use tracing::{debug, info};

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

/// Ceiling for configured delivery amounts, in rupees (₹1 crore).
///
/// Keeps every amount, and any cart total built from it, far inside the
/// range of `Money`'s paise.
pub const MAX_DELIVERY_AMOUNT: i64 = 10_000_000;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Amounts are whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    pub tax_rate_bps: u32,
    pub free_delivery_threshold: i64,
    pub delivery_fee: i64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            free_delivery_threshold: DEFAULT_FREE_DELIVERY_THRESHOLD,
            delivery_fee: DEFAULT_DELIVERY_FEE,
        }
    }
}

/// The pincode checker's fake network latency. Zero disables it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverySettings {
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGateSettings {
    pub minimum_age: u32,
}

impl Default for AgeGateSettings {
    fn default() -> Self {
        AgeGateSettings {
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    /// Upper bound on concurrently open carts.
    pub max_sessions: usize,
    /// A cart untouched for this long is dropped.
    pub idle_timeout_secs: u64,
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            max_sessions: 10_000,
            idle_timeout_secs: 30 * 60,
        }
    }
}

/// Storefront service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub delivery: DeliverySettings,

    #[serde(default)]
    pub age_gate: AgeGateSettings,

    #[serde(default)]
    pub carts: CartSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .or_else(|| env::var("STOREFRONT_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            info!(?path, "Loading storefront config from file");
            Self::from_toml(&std::fs::read_to_string(&path)?)?
        } else {
            debug!(?path, "Config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `STOREFRONT_*` overrides from a variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        }

        if let Some(host) = lookup("STOREFRONT_HOST") {
            self.server.host = host;
        }
        if let Some(v) = lookup("STOREFRONT_PORT") {
            self.server.port = parse("STOREFRONT_PORT", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_TAX_RATE_BPS") {
            self.pricing.tax_rate_bps = parse("STOREFRONT_TAX_RATE_BPS", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_FREE_DELIVERY_THRESHOLD") {
            self.pricing.free_delivery_threshold = parse("STOREFRONT_FREE_DELIVERY_THRESHOLD", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_DELIVERY_FEE") {
            self.pricing.delivery_fee = parse("STOREFRONT_DELIVERY_FEE", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_DELIVERY_DELAY_MS") {
            self.delivery.simulated_delay_ms = parse("STOREFRONT_DELIVERY_DELAY_MS", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_MINIMUM_AGE") {
            self.age_gate.minimum_age = parse("STOREFRONT_MINIMUM_AGE", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_MAX_CARTS") {
            self.carts.max_sessions = parse("STOREFRONT_MAX_CARTS", v)?;
        }
        if let Some(v) = lookup("STOREFRONT_CART_IDLE_SECS") {
            self.carts.idle_timeout_secs = parse("STOREFRONT_CART_IDLE_SECS", v)?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }

        validate_tax_rate_bps(self.pricing.tax_rate_bps)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        for (field, amount) in [
            ("pricing.free_delivery_threshold", self.pricing.free_delivery_threshold),
            ("pricing.delivery_fee", self.pricing.delivery_fee),
        ] {
            if !(0..=MAX_DELIVERY_AMOUNT).contains(&amount) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and {}",
                    field, MAX_DELIVERY_AMOUNT
                )));
            }
        }

        if self.age_gate.minimum_age == 0 {
            return Err(ConfigError::Invalid(
                "age_gate.minimum_age must be at least 1".into(),
            ));
        }

        if self.carts.max_sessions == 0 {
            return Err(ConfigError::Invalid(
                "carts.max_sessions must be at least 1".into(),
            ));
        }

        if self.carts.idle_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "carts.idle_timeout_secs must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Address to bind. `server.host` may be an IP literal or a hostname;
    /// a hostname binds to the first address it resolves to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::InvalidValue("server.host".to_string()))
    }

    /// Pricing rules derived from the `[pricing]` section.
    ///
    /// Expects a config that passed [`validate`](Self::validate).
    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            tax_rate: TaxRate::from_bps(self.pricing.tax_rate_bps),
            free_delivery_threshold: Money::from_rupees(self.pricing.free_delivery_threshold),
            delivery_fee: Money::from_rupees(self.pricing.delivery_fee),
        }
    }

    pub fn cart_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.carts.idle_timeout_secs)
    }

    /// `None` when the simulated latency is disabled.
    pub fn delivery_delay(&self) -> Option<Duration> {
        (self.delivery.simulated_delay_ms > 0)
            .then(|| Duration::from_millis(self.delivery.simulated_delay_ms))
    }
}
