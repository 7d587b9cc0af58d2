use anyhow::Result;
use clinic_site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_site=info".parse()?),
        )
        .init();

    info!("Starting clinic site");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!(
        "Serving {} at {} (language cookie: {})",
        config.site_name, config.public_base_url, config.language_cookie
    );

    server::serve(config).await
}
