//! Diagnostic logging setup
//!
//! All diagnostics go through `tracing` and are written to stderr so the
//! report on stdout stays clean. `RUST_LOG` overrides the level chosen here.

use tracing_subscriber::EnvFilter;

/// Verbosity requested on the command line or through the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Emit debug-level diagnostics from this crate
    pub verbose: bool,
    /// Include source file and line in every record
    pub report_caller: bool,
}

impl LogSettings {
    pub fn new(verbose: bool, report_caller: bool) -> Self {
        Self {
            verbose,
            report_caller,
        }
    }

    /// Directive used when `RUST_LOG` is not set
    pub fn default_directive(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(settings: LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(settings.report_caller)
        .with_line_number(settings.report_caller)
        .try_init();
}
