// Public modules
pub mod answers;
pub mod error;
pub mod git;
pub mod prompt;
pub mod scaffold;
pub mod template;
pub mod validate;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
