use anyhow::Result;
use tracing_subscriber::EnvFilter;

use stayhub::config::AppConfig;
use stayhub::server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional YAML config file, then env overrides on top
    let mut config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    };
    config.apply_env()?;

    server::serve(config).await
}
