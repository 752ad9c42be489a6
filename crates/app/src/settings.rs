//! Application settings.
//!
//! Layers, lowest priority first: built-in defaults, the optional TOML file
//! (`settings.toml`, or `--config <path>`), `SHOPKEEP__*` environment
//! variables, then command-line overrides.

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8001,
            cors_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Database {
    Memory,
    Sqlite { path: String },
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite {
            path: "shopkeep.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Database,
}

#[derive(Debug, Parser)]
#[command(name = "shopkeep", about = "Shop bookkeeping HTTP service")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings = Self::load(config_path)?;

        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }

    fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("SHOPKEEP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let settings = Settings::load("does-not-exist").unwrap();

        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 8001);
        assert_eq!(settings.server.cors_origins, vec!["*"]);
        assert_eq!(
            settings.database,
            Database::Sqlite {
                path: "shopkeep.db".to_string()
            }
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = std::env::temp_dir().join(format!("shopkeep-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9000
cors_origins = ["http://localhost:3000"]

[database]
kind = "memory"
"#,
        )
        .unwrap();

        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(settings.database, Database::Memory);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
