//! Errors raised while selecting files

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("invalid file mask '{mask}': {source}")]
    Pattern {
        mask: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read matched path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to resolve '{}': {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
