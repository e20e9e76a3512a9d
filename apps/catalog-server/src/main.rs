use anyhow::{Context, Result};
use catalog_service::CatalogServiceModule;
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

mod config;
use config::{AppConfig, LoggingConfig};

const DEFAULT_CONFIG_PATH: &str = "config/catalog-server.yaml";

#[derive(Parser, Debug)]
#[command(name = "catalog-server", about = "Discoteque album and artist catalog")]
struct CliArgs {
    /// YAML configuration file. Defaults to `config/catalog-server.yaml` when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config_path = args.config.or_else(|| {
        let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
        fallback.exists().then_some(fallback)
    });
    let cfg = AppConfig::load(config_path.as_deref()).context("loading configuration")?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging)?;
    if let Some(path) = config_path.as_deref() {
        info!(path = %path.display(), "Loaded configuration file");
    }

    run(cfg).await
}

fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(cfg.json.then(|| fmt::layer().json()))
        .with((!cfg.json).then(fmt::layer))
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}

async fn run(cfg: AppConfig) -> Result<()> {
    info!(url = %redact(&cfg.database.url), "Connecting to database");
    let mut options = ConnectOptions::new(cfg.database.url.clone());
    options
        .max_connections(cfg.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("connecting to database")?;

    let module = CatalogServiceModule::init(db, cfg.catalog).await?;

    let router = module
        .register_rest(axum::Router::new())?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", cfg.server.bind_addr))?;
    info!(addr = %cfg.server.bind_addr, "Catalog server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Strip credentials from a connection URL before logging it
fn redact(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };
    if url.password().is_none() {
        return raw.to_string();
    }
    if url.set_password(None).is_err() || url.set_username("").is_err() {
        return raw.to_string();
    }
    url.to_string()
}
