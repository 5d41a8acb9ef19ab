// Library interface for TrainStat modules
// Integration tests and the CLI both go through this crate root

pub mod config;
pub mod error;
pub mod export;
pub mod formulas;
pub mod import;
pub mod logging;
pub mod models;

// Re-export commonly used types for convenience
pub use models::*;
pub use config::AppConfig;
pub use error::{ImportError, ReadingError, Result, TrainStatError};
pub use export::OutputFormat;
pub use import::{read_package, read_packages, ImportManager};
pub use logging::{LogConfig, LogFormat, LogLevel};
