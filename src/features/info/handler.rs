use axum::Json;
use axum::extract::State;

use crate::core::clock::format_timestamp;
use crate::core::error::AppError;
use crate::features::info::InfoResponse;
use crate::server::AppState;

pub const APP_NAME: &str = "simple-java-docker";
pub const APP_VERSION: &str = "1.0.0";

pub async fn handle_info(State(state): State<AppState>) -> Result<Json<InfoResponse>, AppError> {
    let timestamp = format_timestamp(&state.clock.now());
    let total_messages = state.messages.count_messages().await?;

    Ok(Json(InfoResponse {
        app: APP_NAME.to_string(),
        version: APP_VERSION.to_string(),
        timestamp,
        total_messages,
    }))
}
