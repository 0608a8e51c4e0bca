/// Base Config
pub mod base;
pub use base::*;

/// Core Config
pub mod config;
pub use crate::config::*;

/// Cli Config
pub mod cli;
pub use cli::*;

/// Environment Config
pub mod env;
pub use env::*;

/// Network Configuration
pub mod networks;
pub use networks::*;
