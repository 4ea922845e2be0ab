//! Shared runtime state for CLI interactions and command execution.

use std::path::{Path, PathBuf};

use dialoguer::theme::ColorfulTheme;
use tracing::warn;

use crate::{
    advisor::InsightAdvisor,
    config::{Config, ConfigManager},
    currency::CurrencyFormat,
    domain::AppData,
    storage::PersistenceGateway,
    utils::paths,
};

use super::{commands, core::CliError, io as cli_io, registry::CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub base_dir: PathBuf,
    pub config: Config,
    pub currency: CurrencyFormat,
    pub gateway: PersistenceGateway,
    pub data: AppData,
    pub advisor: InsightAdvisor,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, paths::app_data_dir())
    }

    /// Builds a context rooted at `base`, loading config and records from it.
    pub fn with_base_dir(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let manager = ConfigManager::with_base_dir(&base)?;
        let config = manager.load().unwrap_or_else(|err| {
            warn!(error = %err, "config unreadable; using defaults");
            Config::default()
        });
        let gateway = PersistenceGateway::json_file(config.resolve_data_file(&base));
        let data = gateway.load();

        let mut registry = CommandRegistry::new();
        for entry in commands::all_definitions() {
            registry.register(entry);
        }

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            currency: config.currency_format(),
            advisor: InsightAdvisor::from_config(&config),
            base_dir: base,
            config,
            gateway,
            data,
            last_command: None,
            running: true,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn prompt(&self) -> String {
        format!(
            "fintrack [{} txn / {} debts]> ",
            self.data.transactions.len(),
            self.data.debts.len()
        )
    }

    pub fn completions(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        self.registry.completions()
    }

    pub fn is_script(&self) -> bool {
        self.mode == CliMode::Script
    }

    /// Saves both collections after a change. Failures are already logged
    /// by the gateway; the user only gets a warning.
    pub fn persist(&self) {
        if !self.gateway.save(&self.data) {
            cli_io::print_warning("Changes could not be saved to disk.");
        }
    }
}
