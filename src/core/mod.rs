pub mod config;
pub mod errors;
pub mod kernel;
pub mod registry;
pub mod traits;
pub mod types;
pub mod wrapper;
