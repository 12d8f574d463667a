use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flowhub_translate::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flowhub_translate=debug,tower_http=debug")),
        )
        .init();

    let (config, loaded_path) = Config::discover()?;
    info!("Loaded configuration from: {}", loaded_path);

    let app_state = AppState::new(config.clone())?;
    let app = build_router(app_state);

    let addr = config.system_config.bind_address();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
