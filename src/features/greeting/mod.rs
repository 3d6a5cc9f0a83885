pub mod dto;
pub mod handler;

pub use dto::HelloResponse;
pub use handler::{GREETING, handle_hello};
