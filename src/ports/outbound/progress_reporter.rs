/// ProgressReporter port for reporting progress during a run
///
/// Vendor lookups are rate limited and can take minutes, so the use case
/// reports each step and each completed lookup through this port.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of the vendor lookups
    ///
    /// # Arguments
    /// * `current` - Completed lookups
    /// * `total` - Expected lookups (parts x vendors)
    /// * `message` - Optional message, usually the vendor name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
