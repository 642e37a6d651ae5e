pub mod handlers;
pub mod models;
pub mod service;
pub mod session;
pub mod types;

pub use models::RoundPair;
pub use service::RoundService;
pub use session::RoundSessionStore;
