use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
}
