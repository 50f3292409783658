/// ProgressReporter port for reporting progress during a conversion run
///
/// Reports go to stderr (or nowhere) so they never mix with generated output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports per-component progress
    ///
    /// # Arguments
    /// * `current` - Number of the component being converted (1-based)
    /// * `total` - Number of components in the workspace
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
