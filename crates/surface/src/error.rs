//! Error type for file inspection and walking.

use std::path::PathBuf;
use surface_languages::LanguageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no language registered for '{}'", .0.display())]
    UnsupportedFile(PathBuf),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("error walking {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}
