use tracing_subscriber::EnvFilter;

use intake_api::config::ApiConfig;
use intake_api::{router, AppState};
use intake_session::Services;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match &config.evaluation_endpoint {
        Some(url) => tracing::info!(%url, "using remote evaluation backend"),
        None => tracing::info!("no evaluation endpoint configured, serving demo evaluations"),
    }

    let state = AppState::new(Services::with_gateway(config.evaluation_gateway()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
