//! Penny Dashboard CLI
//!
//! Loads a user's dashboard snapshot, waits for the insight enrichment to
//! settle, and prints an overview.
//!
//! Usage: cargo run --bin penny -- <user-id>

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use penny_client::HttpDashboardApi;
use penny_core::{DashboardAggregator, EnrichmentStatus, ViewState};
use penny_shared::{AppConfig, UserId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "penny=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let user = UserId::new(
        std::env::args()
            .nth(1)
            .context("Usage: penny <user-id>")?,
    );

    let client = HttpDashboardApi::new(&config.api)?;
    let aggregator = DashboardAggregator::new(client);
    info!(base_url = %config.api.base_url, %user, "loading dashboard");

    aggregator.load_snapshot(&user).await?;
    aggregator.settled().await;

    let state = aggregator.current();
    let ViewState::Loaded(view) = state else {
        anyhow::bail!("dashboard did not load");
    };

    for folder in &view.folders {
        println!("{} {} ({} accounts)", folder.icon, folder.name, folder.account_count);
        for account in &folder.accounts {
            println!(
                "  {} [{}] balance {} health {}",
                account.name, account.account_type, account.current_balance, account.health_status
            );
        }
    }

    println!();
    for account in &view.accounts {
        let Some(entry) = view.enrichment.get(&account.id) else {
            continue;
        };
        match entry.status {
            EnrichmentStatus::Ok => {
                let projection = entry
                    .insights
                    .as_ref()
                    .and_then(|insights| insights.projections.as_ref())
                    .and_then(|projections| projections.one_month.as_ref());
                if let Some(projection) = projection {
                    println!(
                        "{}: projected balance {} in one month (confidence {:.2})",
                        account.name, projection.projected_balance, projection.confidence
                    );
                } else {
                    println!("{}: no projection available", account.name);
                }
            }
            EnrichmentStatus::Failed => println!("{}: insights unavailable", account.name),
            EnrichmentStatus::Pending => {}
        }
    }

    for err in view.failed_enrichments() {
        eprintln!("warning: {err}");
    }

    Ok(())
}
