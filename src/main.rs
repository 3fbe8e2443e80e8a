use clap::Parser;
use std::sync::Arc;
use team_planner::adapters::http;
use team_planner::core::ProviderConfig;
use team_planner::utils::{logger, validation::Validate};
use team_planner::{AppState, CliArgs, CompletionRelay, GroqClient, Planner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_logger(args.verbose, args.log_json);

    tracing::info!("Starting team-planner");

    let settings = match args.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = settings.resolve_addr().await?;
    let model = settings.model().to_string();
    tracing::info!("Using model {} at {}", model, settings.base_url());

    let client = Arc::new(GroqClient::new(settings));
    let planner = Planner::new(CompletionRelay::new(client, model));
    let state = Arc::new(AppState { planner });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("📡 Listening on http://{}", listener.local_addr()?);

    http::serve(listener, state).await?;

    tracing::info!("Server stopped");
    Ok(())
}
