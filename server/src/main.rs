mod config;
mod routes;
mod services;
mod state;

use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    let state = state::AppState::new(config);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site not configured; serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gframe listening");
    axum::serve(listener, app.layer(TraceLayer::new_for_http()))
        .await
        .expect("server failed");
}
