use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("context radius must be at least 1, got {0}")]
    InvalidRadius(usize),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
