//! Zarinpal gateway client

use crate::config::{paths, ZarinpalConfig};
use crate::status;
use crate::transport::{HttpTransport, Transport};
use crate::types::*;
use crate::{Result, ZarinpalError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the Zarinpal payment gateway
///
/// Holds an immutable configuration; every operation is one POST to a fixed
/// endpoint. Only status code `100` counts as success, anything else is
/// returned as [`ZarinpalError::Gateway`].
#[derive(Clone)]
pub struct ZarinpalClient {
    config: ZarinpalConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ZarinpalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZarinpalClient")
            .field("sandbox", &self.config.sandbox)
            .field("api_endpoint", &self.config.api_endpoint())
            .field("payment_endpoint", &self.config.payment_endpoint())
            .field("transport", &"<transport>")
            .finish()
    }
}

impl ZarinpalClient {
    /// Create a client for `merchant_id`, against the sandbox when `sandbox` is set
    pub fn new(merchant_id: impl Into<String>, sandbox: bool) -> Result<Self> {
        Self::with_config(ZarinpalConfig::new(merchant_id, sandbox))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ZarinpalConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport<T>(config: ZarinpalConfig, transport: T) -> Result<Self>
    where
        T: Transport + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    pub fn config(&self) -> &ZarinpalConfig {
        &self.config
    }

    pub fn merchant_id(&self) -> &str {
        &self.config.merchant_id
    }

    pub fn is_sandbox(&self) -> bool {
        self.config.sandbox
    }

    /// API base URL requests are sent to
    pub fn api_endpoint(&self) -> &str {
        self.config.api_endpoint()
    }

    /// Payment page base URL used to build redirect URLs
    pub fn payment_endpoint(&self) -> &str {
        self.config.payment_endpoint()
    }

    /// Open a payment session and return the URL to redirect the payer to
    pub async fn create_payment(
        &self,
        amount: i64,
        callback_url: &str,
        description: &str,
    ) -> Result<PaymentSession> {
        self.create_payment_with(&PaymentRequest::new(amount, callback_url, description))
            .await
    }

    /// Open a payment session with optional payer metadata
    pub async fn create_payment_with(&self, request: &PaymentRequest) -> Result<PaymentSession> {
        request.validate()?;

        let body = PaymentRequestBody::new(self.merchant_id(), request);
        let resp: Envelope<PaymentRequestData> = self.send(paths::REQUEST, &body).await?;
        let code = check_status(paths::REQUEST, resp.status())?;
        let data = resp.into_data();

        Ok(PaymentSession {
            payment_url: format!("{}{}", self.payment_endpoint(), data.authority),
            authority: data.authority,
            fee: data.fee,
            fee_type: data.fee_type,
            status: code,
            message: data.message,
        })
    }

    /// Verify a payment after the payer returns to the callback URL
    pub async fn verify_transaction(&self, amount: i64, authority: &str) -> Result<Verification> {
        if amount <= 0 {
            return Err(ZarinpalError::validation("amount must be a positive number"));
        }
        require_authority(authority)?;

        let body = VerifyRequestBody {
            merchant_id: self.merchant_id(),
            amount,
            authority,
        };
        let resp: Envelope<VerifyData> = self.send(paths::VERIFY, &body).await?;
        let code = check_status(paths::VERIFY, resp.status())?;
        let data = resp.into_data();

        Ok(Verification {
            verified: true,
            ref_id: data.ref_id,
            card_hash: data.card_hash,
            card_pan: data.card_pan,
            fee: data.fee,
            fee_type: data.fee_type,
            status: code,
            message: data.message,
        })
    }

    /// List paid transactions that have not been verified yet
    pub async fn unverified_transactions(&self) -> Result<UnverifiedTransactions> {
        let body = MerchantBody {
            merchant_id: self.merchant_id(),
        };
        let resp: Envelope<UnverifiedData> = self.send(paths::UNVERIFIED, &body).await?;
        let code = check_status(paths::UNVERIFIED, resp.status())?;
        let data = resp.into_data();

        Ok(UnverifiedTransactions {
            authorities: data.authorities,
            status: code,
            message: data.message,
        })
    }

    /// Ask the gateway for the current state of a transaction
    pub async fn inquire_transaction(&self, authority: &str) -> Result<Inquiry> {
        require_authority(authority)?;

        let body = AuthorityBody {
            merchant_id: self.merchant_id(),
            authority,
        };
        let resp: Envelope<InquiryData> = self.send(paths::INQUIRY, &body).await?;
        let code = check_status(paths::INQUIRY, resp.status())?;
        let data = resp.into_data();

        Ok(Inquiry {
            inquiry_code: data.status,
            status: code,
            message: data.message,
        })
    }

    /// Reverse (refund to the payer) a transaction
    pub async fn reverse_transaction(&self, authority: &str) -> Result<Reversal> {
        require_authority(authority)?;

        let body = AuthorityBody {
            merchant_id: self.merchant_id(),
            authority,
        };
        let resp: Envelope<ReverseData> = self.send(paths::REVERSE, &body).await?;
        let code = check_status(paths::REVERSE, resp.status())?;
        let data = resp.into_data();

        Ok(Reversal {
            status: code,
            message: data.message,
        })
    }

    /// Encode `body`, POST it to `path` under the API endpoint and decode the reply
    async fn send<Req, Res>(&self, path: &str, body: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_endpoint(), path);
        let payload = serde_json::to_vec(body)?;

        let raw = self.transport.post(&url, payload).await?;

        serde_json::from_slice(&raw).map_err(|e| {
            debug!(path, error = %e, "could not decode gateway response");
            ZarinpalError::InvalidResponse
        })
    }
}

fn require_authority(authority: &str) -> Result<()> {
    if authority.is_empty() {
        return Err(ZarinpalError::validation("authority should not be empty"));
    }
    Ok(())
}

fn check_status(path: &str, code: i32) -> Result<i32> {
    if status::is_success(code) {
        debug!(path, code, "gateway accepted request");
        Ok(code)
    } else {
        warn!(path, code, "gateway rejected request");
        Err(ZarinpalError::gateway(code))
    }
}
