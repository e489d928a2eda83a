//! Walk through a sandbox payment: open a session, then verify it
//!
//! Run with `cargo run --example payment_flow -- <merchant_id> [authority]`.
//! Without an authority a new payment session is opened and its URL printed;
//! with one, the payment is verified.

use std::env;
use zarinpal::{status, ZarinpalClient, ZarinpalError};

const AMOUNT: i64 = 10_000;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let merchant_id = args
        .next()
        .ok_or("usage: payment_flow <merchant_id> [authority]")?;
    let client = ZarinpalClient::new(merchant_id, true)?;

    let result = match args.next() {
        None => client
            .create_payment(AMOUNT, "https://example.com/callback", "sandbox order")
            .await
            .map(|session| {
                println!("Authority: {}", session.authority);
                println!("Pay at: {}", session.payment_url);
            }),
        Some(authority) => client
            .verify_transaction(AMOUNT, &authority)
            .await
            .map(|verification| {
                println!("Verified, ref id {}", verification.ref_id);
                println!("Card: {}", verification.card_pan);
            }),
    };

    if let Err(ZarinpalError::Gateway { code }) = &result {
        let text = status::describe(*code).unwrap_or("unknown status");
        eprintln!("Gateway rejected the request: {} ({})", code, text);
    }

    Ok(result?)
}
