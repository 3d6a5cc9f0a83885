pub mod router;
pub mod routing;
pub mod shutdown;
pub mod state;

pub use router::build_router;
pub use shutdown::shutdown_signal;
pub use state::AppState;
