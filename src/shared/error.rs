use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A completed run exits with `Success` even when shortages were found,
/// unless the caller opted into `--fail-on-shortage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The stock check completed
    Success = 0,
    /// At least one part has no vendor able to supply it (only with `--fail-on-shortage`)
    ShortagesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing MPN, missing credential, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ShortagesDetected => write!(f, "Shortages Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the stock check.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// `MissingIdentifier` and `CredentialMissing` abort the run before any
/// vendor is queried and are surfaced through the notification sink.
#[derive(Debug, Error)]
pub enum StockCheckError {
    #[error("{reference} does not have an MPN specified\n\n💡 Hint: Add an 'MPN' field to the footprint or exclude the reference")]
    MissingIdentifier { reference: String },

    #[error("No API key found for {vendor}\n\n💡 Hint: {hint}")]
    CredentialMissing { vendor: String, hint: String },

    #[error("Failed to read BOM file: {path}\nDetails: {details}\n\n💡 Hint: Export a CSV BOM with 'Reference' and 'MPN' columns")]
    BomReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for patterns, vendor slots and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl StockCheckError {
    /// Title used when the error is shown as a blocking notification.
    pub fn title(&self) -> &'static str {
        match self {
            StockCheckError::MissingIdentifier { .. } => "No MPN specified",
            StockCheckError::CredentialMissing { .. } => "No API Key found",
            StockCheckError::BomReadError { .. } => "Cannot read BOM",
            StockCheckError::FileWriteError { .. } => "Cannot write report",
            StockCheckError::Validation { .. } => "Invalid input",
        }
    }

    /// Whether the use case already notified the user about this error.
    pub fn is_notified(&self) -> bool {
        matches!(
            self,
            StockCheckError::MissingIdentifier { .. } | StockCheckError::CredentialMissing { .. }
        )
    }
}
