use clap::{Args, Parser, Subcommand, ValueEnum};

use rutherford_scholarship::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "scholarship-checker")]
#[command(about = "Rutherford scholarship eligibility checker")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (extension optional)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and a default configuration file
    Init,

    /// Replace the student store with the demo roster
    Seed {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check students by name, or everyone
    Check {
        /// Student names (case-insensitive)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        names: Vec<String>,

        /// Check every student
        #[arg(short, long)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check every student in a grade level
    Grade {
        /// Grade level label, e.g. "Grade 10"
        level: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Evaluate grades given on the command line
    Evaluate {
        /// Grades as COURSE=GRADE, e.g. "English 30-1=90"
        #[arg(required = true)]
        grades: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the courses that count toward the scholarship
    Courses,

    /// Show award counts overall and per grade level
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Menu-driven checker
    Interactive,

    /// Launch interactive TUI dashboard
    #[cfg(feature = "tui")]
    Tui,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also write the results to this file (extension added from --export-format)
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<String>,

    /// Export file format: csv or json
    #[arg(long, default_value = "csv")]
    pub export_format: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_requires_names_or_all() {
        assert!(Cli::try_parse_from(["scholarship-checker", "check"]).is_err());
        assert!(Cli::try_parse_from(["scholarship-checker", "check", "--all", "Alice"]).is_err());

        let cli = Cli::try_parse_from(["scholarship-checker", "check", "Alice", "Ben"]).unwrap();
        match cli.command {
            Commands::Check { names, all, .. } => {
                assert_eq!(names, vec!["Alice", "Ben"]);
                assert!(!all);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn grade_accepts_export_options() {
        let cli = Cli::try_parse_from([
            "scholarship-checker",
            "grade",
            "Grade 10",
            "--export",
            "grade10",
            "--export-format",
            "json",
            "--config",
            "custom",
        ])
        .unwrap();
        assert_eq!(cli.config, "custom");
        match cli.command {
            Commands::Grade { level, output } => {
                assert_eq!(level, "Grade 10");
                assert_eq!(output.export.as_deref(), Some("grade10"));
                assert_eq!(output.export_format, "json");
                assert_eq!(output.format, OutputFormat::Table);
            }
            _ => panic!("expected grade"),
        }
    }
}
