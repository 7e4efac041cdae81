//! Payment-intent gateway.
//!
//! [`PaymentGateway`] is the seam between the payment handlers and the
//! external provider. [`StripeGateway`] talks to the Stripe REST API; tests
//! substitute an in-process fake.

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::{instrument, warn};

use sportsplus_config::PaymentConfig;
use sportsplus_core::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a card-payable intent for `amount` minor units and returns the
    /// client secret.
    ///
    /// # Errors
    ///
    /// An upstream (502) error when the provider is unreachable or refuses.
    async fn create_intent(&self, amount: i64) -> Result<String, AppError>;
}

/// Converts a price in major units to integer minor units, truncating any
/// fraction of a cent.
///
/// # Errors
///
/// Bad request when the price is zero, negative, or too large to represent.
pub fn to_minor_units(price: Decimal) -> Result<i64, AppError> {
    if price <= Decimal::ZERO {
        return Err(AppError::bad_request(anyhow!("price must be positive")));
    }

    price
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|amount| amount.trunc())
        .and_then(|amount| amount.to_i64())
        .filter(|amount| *amount > 0)
        .ok_or_else(|| AppError::bad_request(anyhow!("price is out of range")))
}

pub struct StripeGateway {
    client: reqwest::Client,
    config: PaymentConfig,
}

#[derive(Debug, Deserialize)]
struct IntentBody {
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl StripeGateway {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn intents_url(&self) -> String {
        format!(
            "{}/v1/payment_intents",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self))]
    async fn create_intent(&self, amount: i64) -> Result<String, AppError> {
        if !self.config.is_configured() {
            return Err(AppError::upstream(anyhow!(
                "payment gateway is not configured"
            )));
        }

        let response = self
            .client
            .post(self.intents_url())
            .bearer_auth(&self.config.secret_key)
            .timeout(REQUEST_TIMEOUT)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", self.config.currency.clone()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "payment gateway request failed");
                AppError::upstream(anyhow!("payment gateway is unavailable"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.to_string());
            warn!(%status, %detail, "payment gateway rejected intent");
            return Err(AppError::upstream(anyhow!(
                "payment gateway rejected the request: {}",
                detail
            )));
        }

        response
            .json::<IntentBody>()
            .await
            .map_err(|e| AppError::upstream(anyhow!("invalid payment gateway response: {}", e)))?
            .client_secret
            .ok_or_else(|| AppError::upstream(anyhow!("payment gateway returned no client secret")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minor_units_truncates() {
        assert_eq!(to_minor_units(Decimal::new(19999, 3)).unwrap(), 1999);
        assert_eq!(to_minor_units(Decimal::new(50, 0)).unwrap(), 5000);
        assert_eq!(to_minor_units(Decimal::new(1, 2)).unwrap(), 1);
    }

    #[test]
    fn test_to_minor_units_rejects_non_positive() {
        assert_eq!(
            to_minor_units(Decimal::ZERO).unwrap_err().status.as_u16(),
            400
        );
        assert_eq!(
            to_minor_units(Decimal::new(-5, 0)).unwrap_err().status.as_u16(),
            400
        );
    }

    #[test]
    fn test_to_minor_units_rejects_sub_cent() {
        assert!(to_minor_units(Decimal::new(1, 3)).is_err());
    }

    #[test]
    fn test_intents_url_trims_trailing_slash() {
        let gateway = StripeGateway::new(PaymentConfig {
            api_base: "http://localhost:12111/".to_string(),
            ..PaymentConfig::default()
        });
        assert_eq!(
            gateway.intents_url(),
            "http://localhost:12111/v1/payment_intents"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_is_upstream_error() {
        let gateway = StripeGateway::new(PaymentConfig::default());
        let err = gateway.create_intent(1000).await.unwrap_err();
        assert_eq!(err.status.as_u16(), 502);
    }
}
