use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local request counter. Every read is also an increment.
#[derive(Debug, Default)]
pub struct RequestCounter {
    value: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the post-increment value; the Nth call in global order sees N.
    pub fn increment_and_get(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }
}
