pub mod dto;
pub mod handler;
pub mod memory_store;
pub mod model;
pub mod service;
pub mod sled_store;
pub mod store;

pub use dto::{CreateMessageRequest, MessageResponse};
pub use handler::{handle_create_message, handle_list_messages};
pub use memory_store::InMemoryMessageStore;
pub use model::{Message, NewMessage};
pub use service::{MAX_CONTENT_CHARS, MessageService, validate_content};
pub use sled_store::SledMessageStore;
pub use store::MessageStore;
