//! Client configuration
//!
//! Read from `config.yml` (every section optional) and then overridden by
//! `YOGA_*` environment variables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// User-facing behaviour (notifications)
    #[serde(default)]
    pub ui: UiConfig,
    /// Form validation limits
    #[serde(default)]
    pub forms: FormConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `api/...` paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long confirmation messages stay visible, in milliseconds
    #[serde(default = "default_notification_duration")]
    pub notification_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration_ms: default_notification_duration(),
        }
    }
}

fn default_notification_duration() -> u64 {
    3000
}

/// Form validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Minimum password length on login and registration
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    /// Minimum length of first and last names
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
            name_min_length: default_name_min_length(),
        }
    }
}

fn default_password_min_length() -> usize {
    3
}

fn default_name_min_length() -> usize {
    3
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
}

impl Config {
    /// Read `path`; a missing or blank file means all defaults.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: path.display().to_string(),
                    source,
                }
                .into())
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            }
            .into()
        })
    }

    /// [`Config::load`], then the `YOGA_*` variables on top:
    /// `YOGA_API_BASE_URL`, `YOGA_API_TIMEOUT_SECONDS`,
    /// `YOGA_UI_NOTIFICATION_MS`, `YOGA_FORMS_PASSWORD_MIN_LENGTH`.
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Unparsable values are ignored, as is a zero timeout.
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("YOGA_API_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Some(timeout) = env_number::<u64>("YOGA_API_TIMEOUT_SECONDS").filter(|t| *t > 0) {
            self.api.timeout_seconds = timeout;
        }
        if let Some(duration) = env_number("YOGA_UI_NOTIFICATION_MS") {
            self.ui.notification_duration_ms = duration;
        }
        if let Some(min) = env_number("YOGA_FORMS_PASSWORD_MIN_LENGTH") {
            self.forms.password_min_length = min;
        }
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

/// `at line L, column C: <error>` when serde_yaml knows where it failed
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    match e.location() {
        Some(at) => format!("at line {}, column {}: {}", at.line(), at.column(), e),
        None => e.to_string(),
    }
}

#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
const ENV_KEYS: [&str; 4] = [
    "YOGA_API_BASE_URL",
    "YOGA_API_TIMEOUT_SECONDS",
    "YOGA_UI_NOTIFICATION_MS",
    "YOGA_FORMS_PASSWORD_MIN_LENGTH",
];

/// Serializes access to the `YOGA_*` variables and leaves them unset on drop
#[cfg(test)]
struct EnvGuard {
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl EnvGuard {
    fn acquire() -> Self {
        let guard = CONFIG_ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Self::clear();
        Self { _lock: guard }
    }

    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn clear() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }
}

#[cfg(test)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        Self::clear();
    }
}
