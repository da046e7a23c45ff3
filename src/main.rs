use tracing::info;
use tracing_subscriber::EnvFilter;

use eventcraft::{app, config::Config, errors::Result, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let state = AppState::init(&config).await?;

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Serving invitations at http://{}", listener.local_addr()?);
    info!("Sharing links under {}", state.public_url);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
