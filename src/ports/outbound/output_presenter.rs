use crate::shared::Result;

/// OutputPresenter port for presenting the rendered report
///
/// Abstracts the destination (report file, stdout) of the final artifact.
pub trait OutputPresenter {
    /// Writes the complete content, replacing anything previously there
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
