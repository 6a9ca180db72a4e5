pub mod api;
pub mod config;
pub mod hf;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::hf::HfClient;

#[derive(Clone)]
pub struct AppState {
    pub hf: HfClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            hf: HfClient::new(&config.inference_url, &config.api_key),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    // Browser clients call this from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state).layer(cors)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    info!("listening on 0.0.0.0:{port}");
    axum::serve(listener, app).await.expect("server failed");
}
