use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::features::counter::handle_counter;
use crate::features::greeting::handle_hello;
use crate::features::info::handle_info;
use crate::features::messages::{handle_create_message, handle_list_messages};
use crate::server::AppState;
use crate::server::routing::{handle_not_found, map_method_not_allowed};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/hello", get(handle_hello))
        .route("/api/counter", get(handle_counter))
        .route(
            "/api/messages",
            get(handle_list_messages).post(handle_create_message),
        )
        .route("/api/info", get(handle_info))
        .fallback(handle_not_found)
        .with_state(state)
        .layer(middleware::from_fn(map_method_not_allowed))
        .layer(TraceLayer::new_for_http())
}
