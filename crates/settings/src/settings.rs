use std::path::PathBuf;
use thiserror::Error;

/// A named section of the settings file.
pub trait Settings: Send + Sync + 'static {
    /// Top-level key in the delta file.
    const SECTION: &'static str;

    fn name() -> &'static str {
        Self::SECTION
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),

    #[error("settings file not specified")]
    MissingFile,

    #[error("section `{0}` is not registered")]
    NotRegistered(&'static str),

    #[error("section `{0}` is already registered")]
    AlreadyRegistered(&'static str),

    #[error("section `{0}` must serialize to a struct or map")]
    NotAMap(&'static str),
}
