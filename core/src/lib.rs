// Core LuxAI API functionality

// Export client module - API client for the LuxAI backend
pub mod client;
pub use client::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;

// Export progress module - Byte-counted upload progress
pub mod progress;
pub use progress::ProgressFn;
