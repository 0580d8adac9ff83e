//! Common traits shared between the aggregation core and its front ends

/// Observer notified as repositories are walked.
///
/// Events are monotonic and never influence control flow, so implementations
/// are free to ignore any of them.
pub trait ProgressObserver {
    /// Called once the full repository listing is known
    fn on_repositories_listed(&self, _total: usize) {}

    /// Called once per repository, after its artifact count is known and
    /// before its artifact pages are fetched. Empty repositories are reported too.
    fn on_repository_processed(&self, name: &str);

    /// Called after the last repository has been processed
    fn on_finished(&self) {}
}

/// Observer that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_repository_processed(&self, _name: &str) {}
}
