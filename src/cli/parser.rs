use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser, Debug)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a monthly attendance time sheet into a fixed-width report",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override the time sheet directory from the configuration
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the monthly report of a time sheet
    Report {
        /// Time sheet name: <year>-<month>-<employeeId> (e.g. 2024-02-E17)
        name: String,

        #[arg(long, value_enum, help = "Output format (default from config: text)")]
        format: Option<ExportFormat>,

        #[arg(long, help = "Colour the REMARKS column (text format only)")]
        color: bool,

        #[arg(long, value_name = "FILE", help = "Write the report to FILE instead of stdout")]
        out: Option<String>,

        #[arg(long, short = 'f', requires = "out", help = "Overwrite FILE without confirmation")]
        force: bool,
    },

    /// Validate a time sheet without printing the report
    Check {
        /// Time sheet name: <year>-<month>-<employeeId>
        name: String,
    },

    /// Create the configuration file and the time sheet directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_report_with_options() {
        let cli = Cli::try_parse_from([
            "rtimesheet", "--dir", "/tmp/ts", "report", "2024-02-E17", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.dir.as_deref(), Some("/tmp/ts"));
        match cli.command {
            Commands::Report { name, format, color, out, force } => {
                assert_eq!(name, "2024-02-E17");
                assert_eq!(format, Some(ExportFormat::Json));
                assert!(!color && !force);
                assert!(out.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn force_requires_out() {
        assert!(Cli::try_parse_from(["rtimesheet", "report", "2024-02-E17", "--force"]).is_err());
    }
}
