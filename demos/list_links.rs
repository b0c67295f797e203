//! Streams every link of the account, one page at a time.
//!
//! Credentials and the API URL are read from `BELVO_SECRET_KEY_ID`,
//! `BELVO_SECRET_KEY_PASSWORD` and `BELVO_API_URL`.
//!
//! Run with: cargo run --example list_links

use belvo_rs::BelvoClient;
use futures_util::StreamExt;

#[tokio::main]
async fn main() -> belvo_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = BelvoClient::from_env().await?;

    let mut links = client.links().list_stream(None);
    let mut count = 0;
    while let Some(link) = links.next().await {
        let link = link?;
        count += 1;
        println!(
            "{} {} {}",
            link["id"].as_str().unwrap_or_default(),
            link["institution"].as_str().unwrap_or_default(),
            link["status"].as_str().unwrap_or_default()
        );
    }

    println!("\n{} link(s)", count);
    Ok(())
}
