use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CounterResponse {
    pub count: u64,
}
