mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Presence only; the URI carries credentials.
    if config.mongo_uri.is_some() {
        tracing::info!("MONGO_URI configured");
    } else {
        tracing::warn!("MONGO_URI not set");
    }

    let port = config.port;
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chatter listening");
    axum::serve(listener, app).await.expect("server failed");
}
