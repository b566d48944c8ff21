use std::sync::Arc;

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{parse_timeout, PlannerConfig, DEFAULT_HOST},
    server::{self, AppState},
    GeminiClient, TripPlanner,
};

/// CLI entry point for the trip-planner server
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = command().get_matches();
    let config = resolve_config(&matches)?;

    // Refuse to start unless the credential can list models
    let client = GeminiClient::from_config(&config);
    let models = client.fetch_models().await.map_err(|err| {
        error!("Error configuring API: {}", err);
        err
    })?;
    info!("Available models: {:?}", models);
    info!("Using model: {}", client.model());

    let planner = TripPlanner::from_config(Arc::new(client), &config);
    let state = Arc::new(AppState::new(planner, &config));

    info!("Starting trip planner server...");
    server::serve(state, &config.bind_address())
        .await
        .context("server terminated with an error")?;

    Ok(())
}

fn command() -> Command {
    Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("AI travel planner backed by the Gemini API")
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Gemini API key (or set GOOGLE_API_KEY env var)"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Interface to bind")
                .default_value(DEFAULT_HOST),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on (or set PORT env var, default 5000)")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Gemini model to use (or set GEMINI_MODEL env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Gemini API base URL (or set GEMINI_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Timeout for generation requests (or set GEMINI_TIMEOUT_SECS); none by default"),
        )
}

fn resolve_config(matches: &ArgMatches) -> anyhow::Result<PlannerConfig> {
    let mut config =
        PlannerConfig::from_env_with_api_key(matches.get_one::<String>("api-key").cloned())?;

    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.clone();
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = matches.get_one::<String>("timeout") {
        config.request_timeout = Some(parse_timeout(timeout)?);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_flags_override_defaults() {
        let matches = command().get_matches_from([
            "trip-planner",
            "--api-key",
            "flag-key",
            "--port",
            "8080",
            "--model",
            "gemini-2.0-flash",
            "--timeout",
            "45",
        ]);
        let config = resolve_config(&matches).unwrap();

        assert_eq!(config.api_key(), "flag-key");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = command().try_get_matches_from(["trip-planner", "--port", "99999"]);
        assert!(result.is_err());
    }
}
