use rental_manager::{router, ApiClient, AppState};
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url =
        env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string());
    let state = AppState::new(ApiClient::new(&base_url));

    // Serve even when the backend is down at startup; views degrade to zero
    // counts and each later mutation surfaces its own failure.
    match state.reload().await {
        Ok(()) => info!("loaded initial snapshot from {base_url}"),
        Err(err) => error!("could not load initial data: {err}"),
    }

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
