use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub schemas: SchemaSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaSettings {
    /// Directory scanned for `*.json` sample schemas.
    pub dir: PathBuf,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("schemas"),
        }
    }
}

impl Settings {
    /// Load settings from `formant.toml` in the working directory.
    pub fn new() -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::with_name("formant").required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("schemas.dir", "schemas")?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Load settings from the CLI's config file, then apply CLI overrides
    /// (CLI > env vars > config file).
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("schemas.dir", "schemas")?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        settings.apply_cli_overrides(cli);
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(dir) = &cli.schema_dir {
            self.schemas.dir = dir.clone();
        }
    }
}
