pub mod builder;
pub mod codec;
pub mod connector;
pub mod converters;
pub mod signer;
pub mod types;

// Re-export main types for easier importing
pub use builder::build_connector;
pub use connector::PoloniexConnector;
pub use types::{PoloniexOrderPlaced, PoloniexResponse, PoloniexTicker};
