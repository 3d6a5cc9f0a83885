use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub app: String,
    pub version: String,
    pub timestamp: String,
    pub total_messages: u64,
}
