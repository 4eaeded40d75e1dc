use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub captcha: CaptchaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptchaConfig {
    #[serde(default = "default_code_ttl_secs")]
    pub code_ttl_secs: i64, // seconds
    /// Re-issue is refused while `expires_at > now - resend_grace_secs`.
    #[serde(default = "default_resend_grace_secs")]
    pub resend_grace_secs: i64, // seconds
    /// Debug only: writes issued codes to the log in plaintext.
    #[serde(default)]
    pub log_plaintext_codes: bool,
}

/// Upper bound for `code_ttl_secs` and `resend_grace_secs` (7 days).
pub const MAX_WINDOW_SECS: i64 = 7 * 24 * 3600;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_code_ttl_secs() -> i64 {
    300
}

fn default_resend_grace_secs() -> i64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            code_ttl_secs: default_code_ttl_secs(),
            resend_grace_secs: default_resend_grace_secs(),
            log_plaintext_codes: false,
        }
    }
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件不存在时使用默认值，环境变量仍然生效
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::from_toml_str(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Config file {config_path} not found, using defaults");
                Config::default()
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "cannot read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> AppResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| AppError::ConfigError(format!("failed to parse config file: {e}")))
    }

    /// Overrides file values with whatever `lookup` returns for the known variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(name: &str, value: String) -> AppResult<T> {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| AppError::ConfigError(format!("invalid value for {name}: {value}")))
        }

        if let Some(v) = lookup("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("SERVER_PORT") {
            self.server.port = parse("SERVER_PORT", v)?;
        }
        if let Some(v) = lookup("CAPTCHA_CODE_TTL_SECS") {
            self.captcha.code_ttl_secs = parse("CAPTCHA_CODE_TTL_SECS", v)?;
        }
        if let Some(v) = lookup("CAPTCHA_RESEND_GRACE_SECS") {
            self.captcha.resend_grace_secs = parse("CAPTCHA_RESEND_GRACE_SECS", v)?;
        }
        if let Some(v) = lookup("CAPTCHA_LOG_PLAINTEXT_CODES") {
            self.captcha.log_plaintext_codes = parse("CAPTCHA_LOG_PLAINTEXT_CODES", v)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let ttl = self.captcha.code_ttl_secs;
        if ttl <= 0 || ttl > MAX_WINDOW_SECS {
            return Err(AppError::ConfigError(format!(
                "captcha.code_ttl_secs must be in 1..={MAX_WINDOW_SECS}, got {ttl}"
            )));
        }
        let grace = self.captcha.resend_grace_secs;
        if !(0..=MAX_WINDOW_SECS).contains(&grace) {
            return Err(AppError::ConfigError(format!(
                "captcha.resend_grace_secs must be in 0..={MAX_WINDOW_SECS}, got {grace}"
            )));
        }
        Ok(())
    }
}
