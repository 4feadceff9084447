//! CLI command handlers, one per file.

mod classify;
mod completions;
mod config;
mod send;

pub use classify::run_classify;
pub use completions::run_completions;
pub use config::run_config;
pub use send::run_send;
