use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinesiftError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LinesiftError>;
