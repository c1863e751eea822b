pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod paths;
pub mod scaffold;

// Re-export commonly used types
pub use cli::Command;
pub use config::Config;
pub use scaffold::{GeneratedFile, Scaffold};
