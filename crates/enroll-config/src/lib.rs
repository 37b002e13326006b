use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "enroll";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_BUCKET: &str = "avatars";

pub const ENV_STORAGE_URL: &str = "ENROLL_STORAGE_URL";
pub const ENV_STORAGE_KEY: &str = "ENROLL_STORAGE_KEY";
pub const ENV_STORAGE_BUCKET: &str = "ENROLL_STORAGE_BUCKET";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
}

/// The two required settings of the whole system. Nothing runs without them.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub url: Url,
    pub access_key: String,
    pub bucket: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("storage url is not set (config [storage].url or {ENV_STORAGE_URL})")]
    MissingStorageUrl,
    #[error("storage access key is not set (config [storage].access_key or {ENV_STORAGE_KEY})")]
    MissingStorageKey,
    #[error("invalid storage url: {0}")]
    InvalidStorageUrl(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    storage: Option<StorageFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StorageFile {
    url: Option<String>,
    access_key: Option<String>,
    bucket: Option<String>,
}

#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub url: Option<String>,
    pub access_key: Option<String>,
    pub bucket: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            url: env::var(ENV_STORAGE_URL).ok().filter(|v| !v.is_empty()),
            access_key: env::var(ENV_STORAGE_KEY).ok().filter(|v| !v.is_empty()),
            bucket: env::var(ENV_STORAGE_BUCKET).ok().filter(|v| !v.is_empty()),
        }
    }
}

/// Loads configuration before any submission may run. The file is optional as
/// long as the environment supplies the required settings; a missing url or
/// access key is fatal either way.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let parsed = match resolve_config_path(config_path) {
        Ok(path) => load_at_path(&path, required)?.unwrap_or_default(),
        Err(ConfigError::MissingHomeDir) if !required => ConfigFile::default(),
        Err(ConfigError::InvalidConfigPath(_)) if !required => ConfigFile::default(),
        Err(err) => return Err(err),
    };
    merge_config(parsed, EnvOverrides::from_env())
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(parsed))
}

fn merge_config(parsed: ConfigFile, overrides: EnvOverrides) -> Result<AppConfig> {
    let storage = parsed.storage.unwrap_or_default();

    let url = overrides
        .url
        .or(storage.url)
        .ok_or(ConfigError::MissingStorageUrl)?;
    let access_key = overrides
        .access_key
        .or(storage.access_key)
        .ok_or(ConfigError::MissingStorageKey)?;
    let bucket = overrides
        .bucket
        .or(storage.bucket)
        .unwrap_or_else(|| DEFAULT_BUCKET.to_string());

    let url = Url::parse(&url).map_err(|_| ConfigError::InvalidStorageUrl(url.clone()))?;
    if url.scheme() != "https" {
        return Err(ConfigError::InvalidStorageUrl(url.to_string()));
    }
    if access_key.trim().is_empty() {
        return Err(ConfigError::MissingStorageKey);
    }

    Ok(AppConfig {
        storage: StorageConfig {
            url,
            access_key,
            bucket,
        },
    })
}

// The config file carries the storage access key.
#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
