use std::env;

use crate::config::dto::{AppConfig, StoreBackend};
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_DB_PATH: &str = "data/messages";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("APP_PORT")
        .or_else(|_| env::var("PORT"))
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let db_path = env::var("APP_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

    let store_backend = match env::var("MESSAGE_STORE") {
        Ok(value) => parse_store_backend(&value)?,
        Err(_) => StoreBackend::Sled,
    };

    Ok(AppConfig {
        port,
        db_path,
        store_backend,
    })
}

fn parse_store_backend(value: &str) -> Result<StoreBackend, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "sled" => Ok(StoreBackend::Sled),
        "memory" | "in-memory" => Ok(StoreBackend::Memory),
        other => Err(AppError::configuration(format!(
            "unknown MESSAGE_STORE '{other}', expected 'sled' or 'memory'"
        ))),
    }
}
