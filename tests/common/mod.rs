// tests/common/mod.rs

use video_comments::{config::Config, routes, state::AppState, store::Store};

/// Helper function to spawn the app on a random port for testing.
/// Every call gets a fresh, empty store.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app() -> String {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        seed_file: None,
        cors_origins: vec!["http://localhost:3000".to_string()],
    };

    let state = AppState::new(Store::new(), config);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Creates a user over HTTP and returns its id.
pub async fn create_user(client: &reqwest::Client, address: &str, username: &str) -> i64 {
    let user = client
        .post(format!("{}/users", address))
        .json(&serde_json::json!({ "username": username }))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<serde_json::Value>()
        .await
        .unwrap();
    user["id"].as_i64().unwrap()
}

/// Creates a video over HTTP and returns its id.
pub async fn create_video(client: &reqwest::Client, address: &str, title: &str) -> i64 {
    let video = client
        .post(format!("{}/videos", address))
        .json(&serde_json::json!({
            "title": title,
            "url": "https://cdn.example.com/clip.mp4"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<serde_json::Value>()
        .await
        .unwrap();
    video["id"].as_i64().unwrap()
}

/// Creates a comment over HTTP and returns the response body.
pub async fn create_comment(
    client: &reqwest::Client,
    address: &str,
    text: &str,
    user_id: i64,
    video_id: i64,
) -> serde_json::Value {
    let response = client
        .post(format!("{}/comments", address))
        .json(&serde_json::json!({
            "text": text,
            "userId": user_id,
            "videoId": video_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}
