use axum::Json;
use axum::extract::State;

use crate::core::clock::format_timestamp;
use crate::features::greeting::HelloResponse;
use crate::server::AppState;

pub const GREETING: &str = "Hello from Java Docker app!";

pub async fn handle_hello(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: GREETING.to_string(),
        timestamp: format_timestamp(&state.clock.now()),
    })
}
