//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                | Default        | Meaning                          |
//! |-------------------------|----------------|----------------------------------|
//! | `CART_DEMO_CUSTOMER_ID` | `ABC12345DE-A` | Customer the cart is opened for  |
//! | `CART_DEMO_FIXTURE`     | (built-in)     | JSON catalog/inventory fixture   |
//! | `CART_DEMO_LOG`         | `info`         | tracing filter directive         |

use std::env;
use std::path::PathBuf;

use cart_core::CustomerId;

pub const DEFAULT_CUSTOMER_ID: &str = "ABC12345DE-A";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Customer the cart is opened for
    pub customer_id: CustomerId,

    /// Fixture file; the built-in reference fixture when absent
    pub fixture_path: Option<PathBuf>,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_customer =
            lookup("CART_DEMO_CUSTOMER_ID").unwrap_or_else(|| DEFAULT_CUSTOMER_ID.to_string());
        let customer_id = CustomerId::parse(&raw_customer)
            .map_err(|_| ConfigError::InvalidValue("CART_DEMO_CUSTOMER_ID".to_string()))?;

        let fixture_path = lookup("CART_DEMO_FIXTURE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("CART_DEMO_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(DemoConfig {
            customer_id,
            fixture_path,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
