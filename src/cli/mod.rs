//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod asset;
pub mod compare;
pub mod context;
pub mod handlers;
pub mod report;
pub mod scan;
pub mod site;
pub mod status;
pub mod user;
pub mod xdr;

pub use args::OutputFormat;
use args::{DeleteArgs, SelectionArgs, UserFilterArgs};
pub use context::CommandContext;

/// InsightOps - bulk cleanup and inventory for InsightVM and Cortex XDR
#[derive(Parser, Debug)]
#[command(name = "insightops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "INSIGHTOPS_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "INSIGHTOPS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "INSIGHTOPS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which credentials are configured
    Status,

    /// Display version information
    Version,

    /// List and bulk delete sites
    #[command(subcommand)]
    Site(SiteCommands),

    /// List and bulk delete assets
    #[command(subcommand)]
    Asset(AssetCommands),

    /// List and bulk delete console users
    #[command(subcommand)]
    User(UserCommands),

    /// List report configurations
    #[command(subcommand)]
    Report(ReportCommands),

    /// List scans
    #[command(subcommand)]
    Scan(ScanCommands),

    /// Cortex XDR inventory
    #[command(subcommand)]
    Xdr(XdrCommands),

    /// Check which XDR endpoints are known to InsightVM
    Compare {
        /// Only show hosts InsightVM has no asset for
        #[arg(long)]
        missing_only: bool,
    },
}

/// Site subcommands
#[derive(Subcommand, Debug)]
pub enum SiteCommands {
    /// List sites
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Delete the selected sites
    #[command(after_help = "\
Examples:
  insightops site delete --ids 12,40 --dry-run
  insightops site delete --contains sn_ --empty-only
  insightops site delete --ids-file retire.csv --yes")]
    Delete {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        args: DeleteArgs,
    },
}

/// Asset subcommands
#[derive(Subcommand, Debug)]
pub enum AssetCommands {
    /// List assets
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Delete the selected assets
    Delete {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        args: DeleteArgs,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List console users
    List {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        filters: UserFilterArgs,
    },

    /// Delete the selected users
    Delete {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        args: DeleteArgs,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List report configurations
    List,
}

/// Scan subcommands
#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// List scans
    List {
        /// Only scans still in progress
        #[arg(long)]
        active: bool,
    },
}

/// Cortex XDR subcommands
#[derive(Subcommand, Debug)]
pub enum XdrCommands {
    /// List XDR endpoints
    Endpoints,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_site_delete_parses_selectors() {
        let cli = Cli::try_parse_from([
            "insightops",
            "site",
            "delete",
            "--ids",
            "3,5",
            "--contains",
            "lab",
            "--dry-run",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Site(SiteCommands::Delete { selection, args }) => {
                assert_eq!(selection.ids, vec![3, 5]);
                assert_eq!(selection.contains.as_deref(), Some("lab"));
                assert!(args.dry_run);
                assert!(!args.yes);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_user_list_filters() {
        let cli = Cli::try_parse_from([
            "insightops",
            "user",
            "list",
            "--enabled",
            "false",
            "--role",
            "user",
        ])
        .unwrap();

        match cli.command {
            Commands::User(UserCommands::List { filters, .. }) => {
                assert_eq!(filters.enabled, Some(false));
                assert_eq!(filters.role.as_deref(), Some("user"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
