//! Payment gateway configuration.
//!
//! # Environment Variables
//!
//! - `PAYMENT_SECRET_KEY`: gateway secret key (empty disables intent creation)
//! - `PAYMENT_API_BASE`: gateway base URL (default `https://api.stripe.com`)
//! - `PAYMENT_CURRENCY`: ISO currency code (default `usd`)

use std::env;

#[derive(Clone)]
pub struct PaymentConfig {
    pub secret_key: String,
    pub api_base: String,
    pub currency: String,
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .finish()
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_base: "https://api.stripe.com".to_string(),
            currency: "usd".to_string(),
        }
    }
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret_key: env::var("PAYMENT_SECRET_KEY").unwrap_or_default(),
            api_base: env::var("PAYMENT_API_BASE").unwrap_or(defaults.api_base),
            currency: env::var("PAYMENT_CURRENCY")
                .map(|c| c.to_lowercase())
                .unwrap_or(defaults.currency),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }
}
