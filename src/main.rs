// src/main.rs

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use video_comments::config::Config;
use video_comments::routes;
use video_comments::state::AppState;
use video_comments::store::Store;

#[tokio::main]
async fn main() {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Build the store, seeding it when a seed file is configured
    let store = match &config.seed_file {
        Some(path) => match Store::load(path) {
            Ok(store) => {
                tracing::info!(
                    users = store.users().len(),
                    videos = store.videos().len(),
                    comments = store.comments().len(),
                    "Store seeded from {}",
                    path
                );
                store
            }
            Err(e) => {
                tracing::error!("Failed to load seed file {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Store::new(),
    };

    let addr = config.bind_address();
    let state = AppState::new(store, config);

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listening address");
    tracing::info!("Listening on {}", addr);

    // Start the server
    axum::serve(listener, app).await.expect("Server error");
}
