//! dashboard-cli: fetch company data through the resilient pipeline and
//! print it.
//!
//! Usage:
//!   cargo run -p dashboard-cli -- --symbols AAPL MSFT
//!   cargo run -p dashboard-cli -- --symbols ZZZZ --refresh
//!   cargo run -p dashboard-cli -- --symbols AAPL --json

use data_orchestrator::{DataOrchestrator, FetchConfig};
use fmp_client::FmpClient;
use std::sync::Arc;
use technical_analysis::TechnicalSummary;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_cli=info,data_orchestrator=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let refresh = args.iter().any(|a| a == "--refresh");
    let as_json = args.iter().any(|a| a == "--json");

    let symbols: Vec<String> = match args.iter().position(|a| a == "--symbols") {
        Some(idx) => args[idx + 1..]
            .iter()
            .take_while(|a| !a.starts_with("--"))
            .map(|s| s.trim().to_uppercase())
            .collect(),
        None => Vec::new(),
    };

    if symbols.is_empty() {
        eprintln!("Usage:");
        eprintln!("  dashboard-cli --symbols AAPL MSFT ...   Fetch the given symbols");
        eprintln!("");
        eprintln!("Options:");
        eprintln!("  --refresh    Bypass the cache and force a fresh fetch");
        eprintln!("  --json       Print the full result as JSON");
        std::process::exit(1);
    }

    let api_key = std::env::var("FMP_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("FMP_API_KEY not set: all data will be demo-provenance");
        String::new()
    });

    let provider = Arc::new(FmpClient::new(api_key));
    let orchestrator = DataOrchestrator::new(provider, FetchConfig::from_env())?;

    for symbol in &symbols {
        let result = orchestrator.get_company_data(symbol, refresh).await;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            continue;
        }

        let summary = TechnicalSummary::compute(&result.series, 20, 50, 14);
        let trend = summary
            .short_trend
            .map(|t| format!("{:?}", t).to_lowercase())
            .unwrap_or_else(|| "n/a".to_string());
        let oscillator = summary
            .oscillator
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "n/a".to_string());

        println!(
            "{:<6} [{}] {} | price {:.2} | 30d {:+.1}% | trend {} | osc {}",
            result.profile.symbol,
            result.provenance.as_str(),
            result.profile.name,
            result.metrics.current_price,
            result.metrics.change_30d,
            trend,
            oscillator,
        );
    }

    Ok(())
}
