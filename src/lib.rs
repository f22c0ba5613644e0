pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod matcher;
pub mod window;

pub use cli::Cli;
pub use clap::Parser;
pub use config::Config;
pub use engine::{OutputOptions, SearchEngine, WindowOptions};
pub use error::{LinesiftError, Result};
pub use input::read_lines;
pub use matcher::{MatchOptions, MatchStrategy, Matcher};
pub use window::context_window;
