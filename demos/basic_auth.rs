//! Basic authentication example.
//!
//! Logs in with a secret key pair and lists the institutions available in
//! the chosen environment.
//!
//! Run with: cargo run --example basic_auth

use belvo_rs::BelvoClient;

#[tokio::main]
async fn main() -> belvo_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let key_id = std::env::var("BELVO_SECRET_KEY_ID")
        .expect("BELVO_SECRET_KEY_ID environment variable required");
    let key_password = std::env::var("BELVO_SECRET_KEY_PASSWORD")
        .expect("BELVO_SECRET_KEY_PASSWORD environment variable required");

    println!("Connecting to Belvo sandbox...");

    let client = BelvoClient::new(key_id, key_password, Some("sandbox")).await?;

    println!("Successfully authenticated!");

    let institutions = client.institutions().list(None).await?;
    println!("\nFound {} institution(s):", institutions.len());

    for institution in &institutions {
        println!(
            "  - {} ({})",
            institution["name"].as_str().unwrap_or("unknown"),
            institution["country_code"].as_str().unwrap_or("--")
        );
    }

    println!("\nDone!");
    Ok(())
}
