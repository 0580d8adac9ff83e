//! Command-line argument parsing

use crate::error::{HartisizeError, Result};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "hartisize")]
#[command(about = "Report artifact storage size per repository in a Harbor project")]
#[command(
    long_about = "Lists every repository of a Harbor project, walks all of their artifacts and prints a table with the storage size of each repository and the project total"
)]
#[command(version)]
pub struct Args {
    /// Harbor project to report on
    #[arg(long = "project", default_value = "myProject", help = "Set project name")]
    pub project: String,

    /// Registry username
    #[arg(
        long = "username",
        default_value = "Admin",
        help = "Username for harbor account"
    )]
    pub username: String,

    /// Registry password
    #[arg(
        long = "password",
        default_value = "Password",
        help = "Password for harbor account"
    )]
    pub password: String,

    /// Harbor base URL
    #[arg(long = "host", default_value = "https://localhost", help = "Harbor host")]
    pub host: String,

    /// Sort ascending by size; wins over `--sortDsc`
    #[arg(long = "sortAsc", help = "Sort by size min-max")]
    pub sort_asc: bool,

    #[arg(long = "sortDsc", help = "Sort by size max-min")]
    pub sort_dsc: bool,

    /// Progress bar toggle, `--progress=false` turns it off
    #[arg(
        long = "progress",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Show progress bar"
    )]
    pub progress: bool,

    #[arg(long = "debug", help = "Debug hartisize")]
    pub debug: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate arguments
    pub fn validate(&self) -> Result<()> {
        if self.project.trim().is_empty() {
            return Err(HartisizeError::Argument(
                "Project name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_flag_forms() {
        let args = Args::parse_from(["hartisize"]);
        assert!(args.progress);

        let args = Args::parse_from(["hartisize", "--progress"]);
        assert!(args.progress);

        let args = Args::parse_from(["hartisize", "--progress=false"]);
        assert!(!args.progress);
    }

    #[test]
    fn test_both_sort_flags_are_accepted() {
        let args = Args::parse_from(["hartisize", "--sortAsc", "--sortDsc"]);
        assert!(args.sort_asc);
        assert!(args.sort_dsc);
    }

    #[test]
    fn test_validate_rejects_blank_project() {
        let args = Args::parse_from(["hartisize", "--project", "  "]);
        assert!(matches!(args.validate(), Err(HartisizeError::Argument(_))));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["hartisize", "--bogus"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
