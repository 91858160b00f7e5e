//! PSD2 verification demo
//!
//! Starts a PSD2 verification, waits for the code on stdin and checks it.
//!
//! Usage:
//!   VERIFY_API_KEY=... VERIFY_API_SECRET=... \
//!     cargo run -p verify_infra --example psd2_demo -- 447700900999 10.31 "Acme Shop"

use std::io::{self, BufRead};

use verify_core::Workflow;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let number = args.next().ok_or("missing phone number argument")?;
    let amount: f64 = args.next().ok_or("missing amount argument")?.parse()?;
    let payee = args.next().unwrap_or_else(|| "Demo Merchant".to_string());

    println!("=== PSD2 Verification Demo ===\n");

    let client = verify_infra::initialize()?;
    println!("✓ Client ready\n");

    let response = client
        .psd2_verify_with_workflow(&number, amount, &payee, Workflow::Sms)
        .await?;

    if !response.is_ok() {
        println!(
            "✗ Verification refused: {} ({})",
            response.status,
            response.error_text.unwrap_or_default()
        );
        return Ok(());
    }
    println!("✓ Verification started, request id {}", response.request_id);

    println!("\nEnter the code you received:");
    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    let check = client.check(&response.request_id, code.trim()).await?;
    if check.is_ok() {
        println!("✓ Payment of {:.2} EUR to {} confirmed", amount, payee);
    } else {
        println!("✗ Check failed: {}", check.status);
        client.cancel_verification(&response.request_id).await?;
        println!("✓ Verification cancelled");
    }

    Ok(())
}
