//! InsightOps CLI - bulk cleanup and inventory for InsightVM and Cortex XDR

use clap::Parser;

mod bulk;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{
    AssetCommands, Cli, Commands, ReportCommands, ScanCommands, SiteCommands, UserCommands,
    XdrCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);
    init_logging(opts.debug);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("insightops version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Site(site_cmd) => match site_cmd {
            SiteCommands::List { selection } => cli::site::list(&opts, &selection).await,
            SiteCommands::Delete { selection, args } => {
                cli::site::delete(&opts, &selection, &args).await
            }
        },
        Commands::Asset(asset_cmd) => match asset_cmd {
            AssetCommands::List { selection } => cli::asset::list(&opts, &selection).await,
            AssetCommands::Delete { selection, args } => {
                cli::asset::delete(&opts, &selection, &args).await
            }
        },
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::List { selection, filters } => {
                cli::user::list(&opts, &selection, &filters).await
            }
            UserCommands::Delete { selection, args } => {
                cli::user::delete(&opts, &selection, &args).await
            }
        },
        Commands::Report(ReportCommands::List) => cli::report::list(&opts).await,
        Commands::Scan(ScanCommands::List { active }) => cli::scan::list(&opts, active).await,
        Commands::Xdr(XdrCommands::Endpoints) => cli::xdr::endpoints(&opts).await,
        Commands::Compare { missing_only } => cli::compare::run(&opts, missing_only).await,
    }
}
