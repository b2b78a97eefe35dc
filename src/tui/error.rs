use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("No game selected")]
    NoGameSelected,

    #[error("Could not open {url}: {source}")]
    OpenFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
