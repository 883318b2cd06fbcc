use std::fmt::{self, Display};

/// Errors produced by model parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownSortMode(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownSortMode(raw) => {
                write!(f, "unknown sort mode: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
