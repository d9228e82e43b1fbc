pub mod errors;

pub use errors::{ConfigError, OrreryError};

pub type Result<T> = std::result::Result<T, OrreryError>;
