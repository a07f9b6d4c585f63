//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "InsightOps Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using environment only)".dimmed()
        );
    }
    println!();

    let config = Config::load_with_env(opts.config_ref())?;

    // InsightVM
    if config.validate_insightvm().is_ok() {
        println!("{} InsightVM credentials configured", "✓".green());
    } else {
        println!("{} InsightVM credentials not configured", "✗".red());
        println!("  → Set INSIGHTVM_BASE_URL, INSIGHTVM_API_USERNAME and INSIGHTVM_API_PASSWORD");
    }
    if let Some(ref url) = config.insightvm.base_url {
        println!("  Console: {}", url.cyan());
    }
    if !config.insightvm.verify_ssl {
        println!(
            "  {} TLS certificate verification disabled",
            "⚠".yellow()
        );
    }

    // Cortex XDR
    if config.validate_xdr().is_ok() {
        println!("{} Cortex XDR credentials configured", "✓".green());
    } else {
        println!("{} Cortex XDR credentials not configured", "○".dimmed());
        println!("  → Set XDR_BASE_URL, XDR_API_KEY and XDR_API_KEY_ID for xdr and compare");
    }
    if let Some(ref url) = config.xdr.base_url {
        println!("  Tenant: {}", url.cyan());
    }

    println!();
    println!(
        "Page size: {}, confirm deletes: {}",
        config.preferences.page_size, config.preferences.confirm_destructive
    );

    Ok(())
}
