pub mod error;
pub mod http;
pub mod logging;
pub mod publish;
pub mod state;

pub use http::build_router;
pub use state::AppState;
