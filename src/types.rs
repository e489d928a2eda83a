//! Request and response types for the Zarinpal v4 payment API

use crate::status;
use crate::{Result, ZarinpalError};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for a new payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Where the gateway redirects the payer afterwards
    pub callback_url: String,
    /// Free-text description shown to the payer
    pub description: String,
    /// Payer mobile number, sent as metadata
    pub mobile: Option<String>,
    /// Payer email, sent as metadata
    pub email: Option<String>,
}

impl PaymentRequest {
    /// Create a new payment request
    pub fn new(
        amount: i64,
        callback_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            callback_url: callback_url.into(),
            description: description.into(),
            mobile: None,
            email: None,
        }
    }

    /// Attach the payer's mobile number
    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    /// Attach the payer's email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check the preconditions, stopping at the first failure
    pub fn validate(&self) -> Result<()> {
        if self.amount < 1 {
            return Err(ZarinpalError::validation("amount must be a positive number"));
        }
        if self.callback_url.is_empty() {
            return Err(ZarinpalError::validation("callback_url should not be empty"));
        }
        if self.description.is_empty() {
            return Err(ZarinpalError::validation("description should not be empty"));
        }
        Ok(())
    }
}

/// A payment session opened by `request.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Payment page URL to redirect the payer to
    pub payment_url: String,
    /// Authority token identifying the session
    pub authority: String,
    pub fee: i64,
    pub fee_type: String,
    /// Gateway status code
    pub status: i32,
    pub message: String,
}

/// Outcome of `verify.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Always `true`: a failed verification is returned as an error instead.
    /// Kept so callers can carry the result around as a plain verified flag.
    pub verified: bool,
    /// Reference id, kept as text so large values survive intact
    pub ref_id: String,
    pub card_hash: String,
    /// Masked card number
    pub card_pan: String,
    pub fee: i64,
    pub fee_type: String,
    pub status: i32,
    pub message: String,
}

/// A paid transaction that has not been verified yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnverifiedAuthority {
    pub authority: String,
    pub amount: i64,
    pub callback_url: String,
    pub referer: String,
    pub date: String,
}

/// Outcome of `unVerified.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnverifiedTransactions {
    /// Unverified authorities in the order the gateway returned them
    pub authorities: Vec<UnverifiedAuthority>,
    pub status: i32,
    pub message: String,
}

/// Outcome of `inquiry.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Transaction state reported by the gateway, e.g. `PAID` or `VERIFIED`
    pub inquiry_code: String,
    pub status: i32,
    pub message: String,
}

/// Outcome of `reverse.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reversal {
    pub status: i32,
    pub message: String,
}

// Wire bodies

#[derive(Debug, Serialize)]
pub(crate) struct PaymentRequestBody<'a> {
    pub merchant_id: &'a str,
    pub amount: i64,
    pub description: &'a str,
    pub callback_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PaymentMetadata<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PaymentMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> PaymentRequestBody<'a> {
    pub fn new(merchant_id: &'a str, request: &'a PaymentRequest) -> Self {
        let metadata = match (request.mobile.as_deref(), request.email.as_deref()) {
            (None, None) => None,
            (mobile, email) => Some(PaymentMetadata { mobile, email }),
        };

        Self {
            merchant_id,
            amount: request.amount,
            description: &request.description,
            callback_url: &request.callback_url,
            metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyRequestBody<'a> {
    pub merchant_id: &'a str,
    pub amount: i64,
    pub authority: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MerchantBody<'a> {
    pub merchant_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthorityBody<'a> {
    pub merchant_id: &'a str,
    pub authority: &'a str,
}

// Wire responses

/// Every response's `data` object carries the status in `code`
pub(crate) trait ResponseData {
    fn code(&self) -> i32;
}

/// `{"data": {...}, "errors": ...}`
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub(crate) struct Envelope<T> {
    /// `None` when the gateway sent no data object (absent, `null` or `[]`)
    #[serde(default, deserialize_with = "object_or_empty")]
    pub data: Option<T>,
    /// Opaque diagnostics; the gateway does not document their shape
    #[serde(default, deserialize_with = "opaque_sequence")]
    pub errors: Vec<Value>,
}

impl<T: ResponseData + Default> Envelope<T> {
    /// Status code for this response.
    ///
    /// `data.code` decides whenever a data object is present. Rejections
    /// arrive as `{"data": [], "errors": {"code": -9, ...}}`, so without one
    /// the first code in `errors` is used instead. That fallback never yields
    /// [`status::SUCCESS`]; an envelope with no data object is never a success.
    pub fn status(&self) -> i32 {
        match &self.data {
            Some(data) => data.code(),
            None => self
                .errors
                .iter()
                .find_map(|error| error.get("code")?.as_i64())
                .and_then(|code| i32::try_from(code).ok())
                .filter(|code| !status::is_success(*code))
                .unwrap_or(0),
        }
    }

    /// The data object, or its zero value when none was sent
    pub fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PaymentRequestData {
    pub authority: String,
    pub fee: i64,
    pub fee_type: String,
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct VerifyData {
    pub code: i32,
    pub message: String,
    pub card_hash: String,
    pub card_pan: String,
    #[serde(deserialize_with = "number_as_string")]
    pub ref_id: String,
    pub fee_type: String,
    pub fee: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UnverifiedData {
    pub code: i32,
    pub message: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub authorities: Vec<UnverifiedAuthority>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct InquiryData {
    pub status: String,
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ReverseData {
    pub code: i32,
    pub message: String,
}

macro_rules! impl_response_data {
    ($($ty:ty),*) => {
        $(impl ResponseData for $ty {
            fn code(&self) -> i32 {
                self.code
            }
        })*
    };
}

impl_response_data!(PaymentRequestData, VerifyData, UnverifiedData, InquiryData, ReverseData);

fn object_or_empty<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        other => T::deserialize(other).map(Some).map_err(de::Error::custom),
    }
}

fn opaque_sequence<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a JSON number (or numeric string) as text without going through a
/// fixed-width integer. Relies on serde_json's `arbitrary_precision`.
fn number_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a number for ref_id, got {}",
            other
        ))),
    }
}
