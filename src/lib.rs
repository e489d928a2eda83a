//! # zarinpal - Zarinpal payment gateway client
//!
//! An async client for the Zarinpal v4 payment REST API. It covers opening a
//! payment session, verifying it when the payer returns, listing unverified
//! transactions, inquiring about a transaction and reversing one.
//!
//! ```no_run
//! use zarinpal::ZarinpalClient;
//!
//! # async fn run() -> zarinpal::Result<()> {
//! let client = ZarinpalClient::new("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx", true)?;
//!
//! let session = client
//!     .create_payment(1000, "https://example.com/callback", "order #1")
//!     .await?;
//! println!("redirect the payer to {}", session.payment_url);
//!
//! let verification = client.verify_transaction(1000, &session.authority).await?;
//! println!("ref id {}", verification.ref_id);
//! # Ok(())
//! # }
//! ```
//!
//! Gateway rejections come back as [`ZarinpalError::Gateway`], whose message is
//! the bare status code; [`status::describe`] maps known codes to text.

pub mod client;
pub mod config;
pub mod error;
pub mod status;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::ZarinpalClient;
pub use config::ZarinpalConfig;
pub use error::{Result, ZarinpalError};
pub use transport::{HttpTransport, Transport};
pub use types::*;

/// Current version of the zarinpal library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ZarinpalClient>();
        assert_send_sync::<ZarinpalConfig>();
    }
}
