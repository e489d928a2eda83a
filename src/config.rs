//! Client configuration and gateway endpoints

use crate::{Result, ZarinpalError};
use std::time::Duration;
use url::Url;

/// Required length of a merchant identifier, in bytes
pub const MERCHANT_ID_LENGTH: usize = 36;

/// Production API base URL
pub const API_ENDPOINT: &str = "https://api.zarinpal.com/pg/v4/payment/";
/// Production payment page base URL
pub const PAYMENT_ENDPOINT: &str = "https://payment.zarinpal.com/pg/StartPay/";
/// Sandbox API base URL
pub const SANDBOX_API_ENDPOINT: &str = "https://sandbox.zarinpal.com/pg/v4/payment/";
/// Sandbox payment page base URL
pub const SANDBOX_PAYMENT_ENDPOINT: &str = "https://sandbox.zarinpal.com/pg/StartPay/";

/// Resource paths appended to the API base URL
pub mod paths {
    pub const REQUEST: &str = "request.json";
    pub const VERIFY: &str = "verify.json";
    pub const UNVERIFIED: &str = "unVerified.json";
    pub const INQUIRY: &str = "inquiry.json";
    pub const REVERSE: &str = "reverse.json";
}

/// Configuration for a [`crate::ZarinpalClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZarinpalConfig {
    /// Merchant identifier issued by the gateway
    pub merchant_id: String,
    /// Whether to talk to the sandbox endpoints
    pub sandbox: bool,
    /// Request timeout; the HTTP client default applies when unset
    pub timeout: Option<Duration>,
    api_endpoint: Option<String>,
    payment_endpoint: Option<String>,
}

impl ZarinpalConfig {
    /// Create a new config for the given merchant
    pub fn new(merchant_id: impl Into<String>, sandbox: bool) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            sandbox,
            timeout: None,
            api_endpoint: None,
            payment_endpoint: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.merchant_id.len() != MERCHANT_ID_LENGTH {
            return Err(ZarinpalError::validation(format!(
                "merchant_id must be {} characters",
                MERCHANT_ID_LENGTH
            )));
        }

        if let Some(endpoint) = &self.api_endpoint {
            validate_endpoint("API", endpoint)?;
        }
        if let Some(endpoint) = &self.payment_endpoint {
            validate_endpoint("payment", endpoint)?;
        }

        Ok(())
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the API base URL. Operation paths are appended to it verbatim.
    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    /// Override the payment page base URL
    pub fn with_payment_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.payment_endpoint = Some(endpoint.into());
        self
    }

    /// API base URL in effect for this config
    pub fn api_endpoint(&self) -> &str {
        match &self.api_endpoint {
            Some(endpoint) => endpoint,
            None if self.sandbox => SANDBOX_API_ENDPOINT,
            None => API_ENDPOINT,
        }
    }

    /// Payment page base URL in effect for this config
    pub fn payment_endpoint(&self) -> &str {
        match &self.payment_endpoint {
            Some(endpoint) => endpoint,
            None if self.sandbox => SANDBOX_PAYMENT_ENDPOINT,
            None => PAYMENT_ENDPOINT,
        }
    }
}

fn validate_endpoint(kind: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| ZarinpalError::config(format!("Invalid {} endpoint: {}", kind, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ZarinpalError::config(format!(
            "{} endpoint must start with http:// or https://",
            kind
        )));
    }

    Ok(())
}
