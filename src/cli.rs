//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Extract, validate and format academic citations.
///
/// Cite finds citation markers in text and renders bibliographic records as
/// APA, MLA, Chicago, IEEE or Harvard citations.
#[derive(Parser, Debug)]
#[command(name = "cite")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find citation mentions in text
    Extract(ExtractArgs),
    /// Format a single record given on the command line
    Format(FormatArgs),
    /// Build a sorted bibliography from JSON records
    Bibliography(BibliographyArgs),
    /// Check JSON records and report problems
    Validate(ValidateArgs),
    /// List supported citation styles
    Styles,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Text file to scan (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Print mentions as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Title of the work
    #[arg(long)]
    pub title: String,

    /// Publication year
    #[arg(long)]
    pub year: String,

    /// Author name, repeatable and kept in order
    #[arg(short, long = "author")]
    pub author: Vec<String>,

    /// Delimited author list, e.g. "Smith, J.; Doe, A."
    #[arg(long)]
    pub authors: Option<String>,

    /// Journal or container title
    #[arg(long)]
    pub journal: Option<String>,

    /// Volume number
    #[arg(long)]
    pub volume: Option<String>,

    /// Issue number
    #[arg(long)]
    pub issue: Option<String>,

    /// Page range
    #[arg(long)]
    pub pages: Option<String>,

    /// Digital Object Identifier
    #[arg(long)]
    pub doi: Option<String>,

    /// Citation style (APA7, MLA9, Chicago17, IEEE, Harvard)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Fail instead of warning when the record is invalid
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BibliographyArgs {
    /// JSON record file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Citation style (APA7, MLA9, Chicago17, IEEE, Harvard)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Fail instead of skipping invalid records
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// JSON record file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_extract_defaults() {
        let cli = Cli::try_parse_from(["cite", "extract"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        let Command::Extract(args) = cli.command else {
            panic!("expected extract command");
        };
        assert!(args.file.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_cli_extract_file_and_json() {
        let cli = Cli::try_parse_from(["cite", "extract", "paper.txt", "--json"]).unwrap();
        let Command::Extract(args) = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(args.file, Some(PathBuf::from("paper.txt")));
        assert!(args.json);
    }

    #[test]
    fn test_cli_verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["cite", "styles", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["cite", "-v", "styles"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["cite", "-q", "-v", "styles"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_format_repeated_authors_keep_order() {
        let cli = Cli::try_parse_from([
            "cite", "format", "--title", "T", "--year", "2023", "-a", "Smith, J.", "--author",
            "Jones, K.", "--style", "MLA9",
        ])
        .unwrap();
        let Command::Format(args) = cli.command else {
            panic!("expected format command");
        };
        assert_eq!(args.author, vec!["Smith, J.", "Jones, K."]);
        assert_eq!(args.style.as_deref(), Some("MLA9"));
        assert!(!args.strict);
    }

    #[test]
    fn test_cli_format_requires_title_and_year() {
        let result = Cli::try_parse_from(["cite", "format", "--title", "T"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_bibliography_style_and_strict() {
        let cli =
            Cli::try_parse_from(["cite", "bibliography", "refs.json", "-s", "IEEE", "--strict"])
                .unwrap();
        let Command::Bibliography(args) = cli.command else {
            panic!("expected bibliography command");
        };
        assert_eq!(args.file, Some(PathBuf::from("refs.json")));
        assert_eq!(args.style.as_deref(), Some("IEEE"));
        assert!(args.strict);
    }

    #[test]
    fn test_cli_config_show() {
        let cli = Cli::try_parse_from(["cite", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config {
                command: ConfigCommand::Show
            }
        ));
    }

    #[test]
    fn test_cli_missing_subcommand_is_error() {
        let result = Cli::try_parse_from(["cite"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | clap::error::ErrorKind::MissingSubcommand
        ));
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Cli::try_parse_from(["cite", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Cli::try_parse_from(["cite", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Cli::try_parse_from(["cite", "styles", "--invalid-flag"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
