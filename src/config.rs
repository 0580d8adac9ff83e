//! Configuration built once at startup from CLI arguments and the environment

use crate::cli::args::Args;
use crate::error::{HartisizeError, Result};
use crate::logging::LogSettings;
use crate::output::SortOrder;
use url::Url;

/// Environment variable switching on debug diagnostics
pub const TRACE_ENV: &str = "HB_SIZE_TRACE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(HartisizeError::Argument(
                "Username cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Registry connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub host: Url,
    pub auth: Option<AuthConfig>,
}

impl RegistryConfig {
    pub fn new(host: Url) -> Self {
        Self { host, auth: None }
    }

    pub fn with_auth(mut self, auth: Option<AuthConfig>) -> Self {
        self.auth = auth;
        self
    }

    pub fn parse_host(host: &str) -> Result<Url> {
        if host.trim().is_empty() {
            return Err(HartisizeError::Config("Host cannot be empty".to_string()));
        }
        let url = Url::parse(host)
            .map_err(|e| HartisizeError::Config(format!("Invalid host URL {}: {}", host, e)))?;
        if url.cannot_be_a_base() {
            return Err(HartisizeError::Config(format!(
                "Invalid host URL {}: must be a base URL such as https://harbor.example.com",
                host
            )));
        }
        Ok(url)
    }
}

/// Immutable application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project: String,
    pub registry: RegistryConfig,
    pub sort: SortOrder,
    pub progress: bool,
    pub debug: bool,
    pub trace: bool,
}

impl AppConfig {
    /// Merge validated arguments with the already parsed trace setting
    pub fn from_args(args: &Args, trace: bool) -> Result<Self> {
        args.validate()?;

        let auth = AuthConfig::new(&args.username, &args.password);
        auth.validate()?;
        let registry = RegistryConfig::new(RegistryConfig::parse_host(&args.host)?)
            .with_auth(Some(auth));

        Ok(Self {
            project: args.project.clone(),
            registry,
            sort: SortOrder::from_flags(args.sort_asc, args.sort_dsc),
            progress: args.progress,
            debug: args.debug,
            trace,
        })
    }

    /// Whether debug-level diagnostics should be emitted
    pub fn verbose(&self) -> bool {
        self.debug || self.trace
    }

    /// Log verbosity; source locations are only reported under [`TRACE_ENV`]
    pub fn log_settings(&self) -> LogSettings {
        LogSettings::new(self.verbose(), self.trace)
    }
}

/// Read [`TRACE_ENV`]; unset means `false`, anything unparsable is fatal
pub fn trace_from_env() -> Result<bool> {
    match std::env::var(TRACE_ENV) {
        Ok(value) => parse_bool(&value).map_err(|e| {
            HartisizeError::Config(format!("{}: {}", TRACE_ENV, e))
        }),
        Err(std::env::VarError::NotPresent) => Ok(false),
        Err(std::env::VarError::NotUnicode(_)) => Err(HartisizeError::Config(format!(
            "{} is not valid unicode",
            TRACE_ENV
        ))),
    }
}

/// Parse the boolean spellings accepted for environment switches
pub fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["hartisize"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_parse_bool_accepts_known_spellings() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Ok(true));
        }
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Ok(false));
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_values() {
        for value in ["", "yes", "no", "tRuE", " true"] {
            assert!(parse_bool(value).is_err());
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_args(&args(&[]), false).unwrap();
        assert_eq!(config.project, "myProject");
        assert_eq!(config.registry.host.as_str(), "https://localhost/");
        assert_eq!(
            config.registry.auth,
            Some(AuthConfig::new("Admin", "Password"))
        );
        assert_eq!(config.sort, SortOrder::None);
        assert!(config.progress);
        assert!(!config.verbose());
    }

    #[test]
    fn test_flags_are_carried_over() {
        let config = AppConfig::from_args(
            &args(&[
                "--project",
                "library",
                "--host",
                "http://harbor.internal:8080",
                "--sortDsc",
                "--progress=false",
                "--debug",
            ]),
            false,
        )
        .unwrap();
        assert_eq!(config.project, "library");
        assert_eq!(config.registry.host.port(), Some(8080));
        assert_eq!(config.sort, SortOrder::Descending);
        assert!(!config.progress);
        assert!(config.verbose());
    }

    #[test]
    fn test_trace_enables_verbose() {
        let config = AppConfig::from_args(&args(&[]), true).unwrap();
        assert!(config.verbose());
        assert_eq!(config.log_settings(), LogSettings::new(true, true));
    }

    #[test]
    fn test_debug_flag_logs_without_caller() {
        let config = AppConfig::from_args(&args(&["--debug"]), false).unwrap();
        assert_eq!(config.log_settings(), LogSettings::new(true, false));
    }

    #[test]
    fn test_malformed_host_is_config_error() {
        let err = AppConfig::from_args(&args(&["--host", "not a url"]), false).unwrap_err();
        assert!(matches!(err, HartisizeError::Config(_)));

        let err = AppConfig::from_args(&args(&["--host", "mailto:admin@example.com"]), false)
            .unwrap_err();
        assert!(matches!(err, HartisizeError::Config(_)));
    }

    #[test]
    fn test_blank_host_is_config_error() {
        let err = AppConfig::from_args(&args(&["--host", "  "]), false).unwrap_err();
        assert!(matches!(err, HartisizeError::Config(_)));
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let err = AppConfig::from_args(&args(&["--username", ""]), false).unwrap_err();
        assert!(matches!(err, HartisizeError::Argument(_)));
    }
}
