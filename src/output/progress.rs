//! Terminal progress bar over the repository walk

use crate::common::ProgressObserver;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{msg} [{elapsed_precise}] {wide_bar:.green/yellow} {pos}/{len}";

/// [`ProgressObserver`] drawing an indicatif bar on stderr
#[derive(Debug, Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

impl IndicatifProgress {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Bar that tracks state without drawing anything
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for IndicatifProgress {
    fn on_repositories_listed(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_repository_processed(&self, name: &str) {
        self.bar.set_message(format!("🚀 {}", name));
        self.bar.inc(1);
    }

    fn on_finished(&self) {
        self.bar.finish_with_message("done");
    }
}
