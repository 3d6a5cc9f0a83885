pub mod dto;
pub mod handler;
pub mod service;

pub use dto::CounterResponse;
pub use handler::handle_counter;
pub use service::RequestCounter;
