//! Example: Managing Helius Webhooks
//!
//! This example walks through the lifecycle of a webhook:
//! - Loading settings from `HELIUS_*` environment variables or a `.env` file
//! - Creating a webhook and listing the account's webhooks
//! - Editing one field and appending addresses
//! - Deleting the webhook again
//!
//! Run with: `HELIUS_API_KEY=... cargo run --example manage_webhooks --features config`
//!
//! Set `RUST_LOG=helius_webhooks=debug` to see every API call.

use helius::helius_config::Settings;
use helius::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Helius Webhook Management");
    println!("=========================\n");

    let settings = Settings::from_env()?;
    let client = WebhookClient::with_config(WebhookClientConfig::from_settings(&settings))?;

    println!("1. Creating a webhook");
    let request = CreateWebhookRequest::new(
        "https://example.com/helius-events",
        [TransactionType::NftSale, TransactionType::Swap],
        ["M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K"],
    )
    .with_webhook_type(WebhookType::Enhanced)
    .with_txn_status(TxnStatus::Success);

    let webhook = client.create(&request).await?;
    println!("   Created: {}", webhook.webhook_id);
    println!();

    println!("2. Listing webhooks");
    for existing in client.list_all().await? {
        println!(
            "   {} -> {} ({} addresses)",
            existing.webhook_id,
            existing.webhook_url,
            existing.account_addresses.len()
        );
    }
    println!();

    println!("3. Editing the auth header");
    let edit = EditWebhookRequest::new().auth_header("Bearer demo-token");
    let webhook = client.edit(&webhook.webhook_id, &edit).await?;
    println!("   Auth header: {:?}", webhook.auth_header);
    println!();

    println!("4. Appending addresses");
    let webhook = client
        .append_addresses(
            &webhook.webhook_id,
            &["86xCnPeV69n6t3DnyGvkKobf9FdN2H9oiVDdaMpo2MMY"],
        )
        .await?;
    println!("   Now watching {} addresses", webhook.account_addresses.len());

    match client
        .append_addresses(&webhook.webhook_id, &vec!["x".to_string(); 10_000])
        .await
    {
        Err(e) if e.is_validation() => println!("   Rejected as expected: {}", e),
        Err(e) => return Err(e.into()),
        Ok(_) => println!("   Unexpectedly accepted"),
    }
    println!();

    println!("5. Deleting the webhook");
    client.delete(&webhook.webhook_id).await?;
    println!("   Deleted {}", webhook.webhook_id);

    Ok(())
}
