use std::sync::Arc;

use crate::core::clock::Clock;
use crate::features::counter::RequestCounter;
use crate::features::messages::{MessageService, MessageStore};

#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<RequestCounter>,
    pub messages: Arc<MessageService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Each state owns a fresh counter starting at zero.
    pub fn new(store: Arc<dyn MessageStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            counter: Arc::new(RequestCounter::new()),
            messages: Arc::new(MessageService::new(store, clock.clone())),
            clock,
        }
    }
}
