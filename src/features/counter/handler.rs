use axum::Json;
use axum::extract::State;

use crate::features::counter::CounterResponse;
use crate::server::AppState;

pub async fn handle_counter(State(state): State<AppState>) -> Json<CounterResponse> {
    let count = state.counter.increment_and_get();
    tracing::debug!(count, "counter incremented");
    Json(CounterResponse { count })
}
