pub mod dto;
pub mod loader;

pub use dto::{AppConfig, StoreBackend};
pub use loader::load_config;
