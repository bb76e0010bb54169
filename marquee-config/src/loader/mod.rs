pub mod error;

use std::{
    collections::HashMap,
    env, fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use self::error::ConfigLoadError;
use crate::{
    models::CatalogConfig,
    validation::{ConfigWarnings, apply_guard_rails},
};

pub const CONFIG_PATH_VAR: &str = "MARQUEE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "MARQUEE_CONFIG_JSON";
pub const API_KEY_VAR: &str = "OMDB_API_KEY";
pub const BASE_URL_VAR: &str = "OMDB_BASE_URL";
pub const ROW_CAP_VAR: &str = "MARQUEE_ROW_CAP";

const DEFAULT_FILES: &[&str] = &[
    "marquee.toml",
    "marquee.json",
    "config/marquee.toml",
    "config/marquee.json",
];

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvPath(path) => {
                write!(f, "{} ({CONFIG_PATH_VAR})", path.display())
            }
            Self::EnvInline => f.write_str(CONFIG_JSON_VAR),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Default => f.write_str("built-in defaults"),
        }
    }
}

/// A validated configuration plus the non-fatal findings about it.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CatalogConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

/// Resolves [`CatalogConfig`] from files and environment variables.
///
/// Precedence, first match wins: `MARQUEE_CONFIG_PATH`, inline
/// `MARQUEE_CONFIG_JSON`, the first default file found under the root, then
/// built-in defaults. `OMDB_API_KEY`, `OMDB_BASE_URL` and `MARQUEE_ROW_CAP`
/// are applied on top of whichever source won.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    path_override: Option<PathBuf>,
    vars: Option<HashMap<String, String>>,
    load_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Reads the process environment and searches the current directory.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
            path_override: None,
            vars: None,
            load_dotenv: true,
        }
    }

    /// Directory that `.env` and the default config files are resolved
    /// against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Explicit config file; takes precedence over every other source.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_override = Some(path.into());
        self
    }

    /// Use `vars` instead of the process environment. A `.env` file under the
    /// root still fills in keys missing from `vars`, but the process
    /// environment is never touched.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    pub fn load(mut self) -> Result<ConfigLoad, ConfigLoadError> {
        if self.load_dotenv {
            self.load_env_file()?;
        }

        let (mut config, source) = self.load_source()?;
        self.apply_env_overrides(&mut config)?;

        let warnings = apply_guard_rails(&config)?;
        info!(
            source = %source,
            rows = config.rows.len(),
            row_cap = config.row_cap,
            warnings = warnings.items.len(),
            "catalog configuration loaded"
        );

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn load_env_file(&mut self) -> Result<(), ConfigLoadError> {
        let path = self.root.join(".env");
        if !path.exists() {
            return Ok(());
        }

        match self.vars.as_mut() {
            Some(vars) => {
                for entry in dotenvy::from_path_iter(&path)? {
                    let (key, value) = entry?;
                    vars.entry(key).or_insert(value);
                }
            }
            None => dotenvy::from_path(&path)?,
        }
        debug!(path = %path.display(), "loaded env file");
        Ok(())
    }

    fn load_source(
        &self,
    ) -> Result<(CatalogConfig, ConfigSource), ConfigLoadError> {
        let env_path = self
            .path_override
            .clone()
            .or_else(|| self.var(CONFIG_PATH_VAR).map(PathBuf::from));
        if let Some(path) = env_path {
            let config = CatalogConfig::load_from_file(&path)
                .map_err(ConfigLoadError::Catalog)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = self.var(CONFIG_JSON_VAR) {
            let config = CatalogConfig::parse_json(&raw)
                .map_err(ConfigLoadError::Catalog)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = CatalogConfig::load_from_file(&path)
                .map_err(ConfigLoadError::Catalog)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((CatalogConfig::default(), ConfigSource::Default))
    }

    fn apply_env_overrides(
        &self,
        config: &mut CatalogConfig,
    ) -> Result<(), ConfigLoadError> {
        if let Some(key) = self.var(API_KEY_VAR) {
            config.api.api_key = key;
        }
        if let Some(base_url) = self.var(BASE_URL_VAR) {
            config.api.base_url = base_url;
        }
        if let Some(raw) = self.var(ROW_CAP_VAR) {
            config.row_cap = raw.trim().parse().map_err(|source| {
                ConfigLoadError::InvalidRowCap {
                    value: raw.clone(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILES
            .iter()
            .map(|candidate| self.root.join(Path::new(candidate)))
            .find(|path| path.exists())
    }

    /// Non-blank value of `key`.
    fn var(&self, key: &str) -> Option<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => env::var(key).ok(),
        };
        value.filter(|value| !value.trim().is_empty())
    }
}
