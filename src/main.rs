use chat_relay::{build_app, config::AppConfig, run_server, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let state = AppState::from_config(&config);
    let app = build_app(state);

    run_server(app, config.port).await;
}
