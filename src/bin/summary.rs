//! Print the landing summary and league list as the dashboard would show them.
//!
//! Usage: `cargo run --bin summary`
//!
//! Reads `STATS_API_URL` (default `http://localhost:5023/api`).

use football_stats::client::records::format_stat;
use football_stats::client::summary::LandingSummary;
use football_stats::client::{ApiClient, StatsSource};
use football_stats::config::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "football_stats=info".into()),
        )
        .init();

    let client = ApiClient::new(&ClientConfig::from_env())?;
    tracing::info!(base_url = client.base_url(), "Fetching league summaries");

    let leagues = client.leagues().await?;
    let summary = LandingSummary::from_leagues(&leagues);

    println!("=== Overview ===");
    println!("Leagues:        {}", summary.total_leagues);
    println!("Teams:          {}", summary.total_teams);
    println!("Players:        {}", summary.total_players);
    println!("Goals:          {}", format_stat(Some(summary.total_goals), 0));
    println!("Goals / match:  {}", summary.goals_per_match);

    println!("\n=== Leagues ===");
    for league in &leagues {
        println!(
            "{:>4}  {:<24} teams {:>3}  players {:>4}  goals/90 {:>5}  tkl+int/90 {:>5}",
            league.competition_key,
            league.competition_name,
            league.teams_count.unwrap_or(0),
            league.players_count.unwrap_or(0),
            format_stat(league.goals_per90, 2),
            format_stat(league.tkl_plus_int_per90, 2),
        );
    }

    Ok(())
}
