use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::core::error::AppError;
use crate::features::messages::dto::{CreateMessageRequest, MessageResponse};
use crate::server::AppState;

pub async fn handle_create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let message = state.messages.create_message(request.content).await?;
    Ok(Json(MessageResponse::from(message)))
}

pub async fn handle_list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state
        .messages
        .list_messages()
        .await?
        .into_iter()
        .map(MessageResponse::from)
        .collect();

    Ok(Json(messages))
}
