// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{comment, user, video},
    state::AppState,
};

/// Builds the CORS policy from the configured origin list.
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Assembles the main application router.
///
/// * Merges all sub-routers (comments, users, videos).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (the shared store).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let comment_routes = Router::new()
        .route(
            "/",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/{id}",
            get(comment::get_comment)
                .put(comment::update_comment)
                .delete(comment::delete_comment),
        )
        .route(
            "/{id}/likes",
            get(comment::list_likes)
                .post(comment::like_comment)
                .delete(comment::unlike_comment),
        );

    let user_routes = Router::new()
        .route("/", get(user::list_users).post(user::create_user))
        .route("/{id}", get(user::get_user));

    let video_routes = Router::new()
        .route("/", get(video::list_videos).post(video::create_video))
        .route("/{id}", get(video::get_video));

    Router::new()
        .nest("/comments", comment_routes)
        .nest("/users", user_routes)
        .nest("/videos", video_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
