use thiserror::Error;

/// Errors that can occur during search and export operations
///
/// Upstream transport and API failures are deliberately absent: the search
/// client degrades those to partial results plus a log line rather than
/// surfacing them to the caller.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A search was submitted with a blank keyword
    #[error("Search keyword must not be empty")]
    EmptyKeyword,

    /// Caller-supplied query input could not be interpreted
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// PDF document generation failed
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    /// Failed to write the generated document to disk
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
