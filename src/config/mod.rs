use crate::importers::CsvOptions;
use anyhow::Error;
use confique::Config;
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Config)]
pub struct DowntableConfig {
    #[config(env = "DOWNTABLE_LAZY_QUOTES", default = false)]
    pub lazy_quotes: bool,

    #[config(env = "DOWNTABLE_TRIM_LEADING_SPACE", default = false)]
    pub trim_leading_space: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[config(env = "DOWNTABLE_LOG", default = "warn")]
    pub log: String,
}

impl DowntableConfig {
    pub fn load() -> Result<DowntableConfig, Error> {
        let c = DowntableConfig::builder()
            .env()
            .file("downtable.toml")
            .load()?;

        Ok(c)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DowntableConfig, Error> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        let c = DowntableConfig::builder().env().file(path).load()?;

        Ok(c)
    }

    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            lazy_quotes: self.lazy_quotes,
            trim_leading_space: self.trim_leading_space,
        }
    }
}

static DOWNTABLE_CONFIG: OnceLock<Arc<DowntableConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<DowntableConfig>, Error> {
    DOWNTABLE_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    if DOWNTABLE_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = DowntableConfig::load()?;
    DOWNTABLE_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

pub fn load_configuration_from<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    if DOWNTABLE_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = DowntableConfig::load_from_file(path)?;
    DOWNTABLE_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}
