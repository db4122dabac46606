use std::net::SocketAddr;

use anyhow::Context;
use auth_gateway::{app, config::APP_CONFIG, state::AppState, utils::tracing::init_standard_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    tracing::info!("Starting application...");
    tracing::info!("Auth backend at {}", APP_CONFIG.api_url);

    let state = AppState::from_config(&APP_CONFIG)?;
    let app = app::create_app(state, APP_CONFIG.swagger_enabled);

    let address = format!("0.0.0.0:{}", APP_CONFIG.port);

    tracing::info!("Server listening on {}", &address);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Failed to start server")?;

    Ok(())
}
