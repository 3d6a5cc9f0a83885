pub mod dto;
pub mod handler;

pub use dto::InfoResponse;
pub use handler::{APP_NAME, APP_VERSION, handle_info};
