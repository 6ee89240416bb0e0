//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scaffolding a post
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Input closed before a title was entered")]
    EndOfInput,

    #[error("Failed to read title: {0}")]
    Input(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl PostError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PostError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PostError>;
