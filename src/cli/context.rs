//! Command execution context
//!
//! Loads configuration once per command and builds API clients on demand,
//! so commands that only talk to one service never need the other's
//! credentials.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{InsightVmClient, XdrClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration with environment overrides applied
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load configuration (file, then environment) for a command.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_with_env(opts.config_ref())?;
        Ok(Self {
            config,
            format: opts.format,
        })
    }

    /// InsightVM client, or a configuration error naming the missing settings.
    pub fn insightvm(&self) -> Result<InsightVmClient> {
        InsightVmClient::new(&self.config.insightvm)
    }

    /// Cortex XDR client, or a configuration error naming the missing settings.
    pub fn xdr(&self) -> Result<XdrClient> {
        XdrClient::new(&self.config.xdr)
    }

    /// Page size for fetch-all listings
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}
