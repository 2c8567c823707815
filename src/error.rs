use crate::{configuration::ConfigurationError, storyblok::ApiError};
use exitcode::ExitCode;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types that can end a purge run
#[derive(Debug, Error)]
pub enum PurgeError {
    /// A required command-line value is missing or invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// Request construction or transport failure
    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),
    /// A listing response could not be decoded
    #[error("Malformed response: {0}")]
    DecodeError(serde_json::Error),
    /// The service refused to delete an asset
    #[error("failed to delete asset {filename} (id {id}): HTTP {status}")]
    DeleteRejected {
        filename: String,
        id: u64,
        status: StatusCode,
    },
    /// The confirmation answer could not be read
    #[error("Failed to read user input: {0}")]
    InputError(std::io::Error),
    /// The prompt or the dry-run listing could not be written
    #[error("Failed to write to the terminal: {0}")]
    OutputError(std::io::Error),
    /// The folder listing kept returning assets past the page cap
    #[error("Folder listing exceeded {max_pages} pages; refusing to continue with a partial listing")]
    PaginationLimitExceeded { max_pages: u32 },
}

impl From<ApiError> for PurgeError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::HttpError(e) => PurgeError::NetworkError(e),
            ApiError::JsonError(e) => PurgeError::DecodeError(e),
        }
    }
}

impl PurgeError {
    /// Get the process exit code for this error
    ///
    /// The codes follow the BSD sysexits.h conventions.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PurgeError::ConfigurationError(_) => exitcode::USAGE,
            PurgeError::NetworkError(_) => exitcode::UNAVAILABLE,
            PurgeError::DecodeError(_) => exitcode::DATAERR,
            PurgeError::DeleteRejected { .. } => exitcode::PROTOCOL,
            PurgeError::InputError(_) => exitcode::IOERR,
            PurgeError::OutputError(_) => exitcode::IOERR,
            PurgeError::PaginationLimitExceeded { .. } => exitcode::PROTOCOL,
        }
    }
}
