//! Configuration and CLI handling

pub mod cli;
pub mod settings;

pub use cli::{Cli, Commands};
pub use settings::Settings;
