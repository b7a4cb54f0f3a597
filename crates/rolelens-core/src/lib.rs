pub mod analytics;
pub mod error;
pub mod generate;
pub mod persona;
pub mod session;

// Re-export common error type
pub use error::RolelensError;
