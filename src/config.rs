use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

const DB_ENV: &str = "SPENDWISE_DB";
const USER_ENV: &str = "SPENDWISE_USER";
const CURRENCY_ENV: &str = "SPENDWISE_CURRENCY";
const LOG_ENV: &str = "RUST_LOG";

pub(crate) const DEFAULT_OWNER: &str = "default";
pub(crate) const DEFAULT_CURRENCY: &str = "₹";
pub(crate) const DEFAULT_LOG_FILTER: &str = "spendwise=warn";

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub db_path: PathBuf,
    pub owner: String,
    pub currency_symbol: String,
    pub log_filter: String,
}

impl Config {
    /// Read settings from the process environment.
    pub(crate) fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, falling back to defaults.
    /// The database lives in the platform data directory unless overridden.
    pub(crate) fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match non_empty(DB_ENV) {
            Some(p) => PathBuf::from(p),
            None => default_db_path()?,
        };
        let owner = non_empty(USER_ENV)
            .or_else(|| non_empty("USER"))
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());

        Ok(Self {
            db_path,
            owner,
            currency_symbol: lookup(CURRENCY_ENV).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            log_filter: non_empty(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub(crate) fn with_owner(mut self, owner: Option<&str>) -> Self {
        if let Some(owner) = owner.map(str::trim).filter(|o| !o.is_empty()) {
            self.owner = owner.to_string();
        }
        self
    }

    pub(crate) fn ensure_data_dir(&self) -> Result<()> {
        if let Some(dir) = self.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
            debug!(dir = %dir.display(), "data directory ready");
        }
        Ok(())
    }
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "spendwise", "Spendwise")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join("spendwise.db"))
}

/// Install the stderr log subscriber. Safe to call more than once.
pub(crate) fn init_tracing(filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
