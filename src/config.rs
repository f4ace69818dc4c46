use crate::error::{AppError, AppResult};
use crate::utils::validate_international_phone;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// CallMeBot WhatsApp 推送配置
///
/// `api_key` 为空时不发起网络请求，只生成 wa.me 手动发送链接。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_callmebot_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_superadmin_phone")]
    pub superadmin_phone: String,
}

impl WhatsAppConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_callmebot_base_url(),
            timeout_secs: default_timeout_secs(),
            superadmin_phone: default_superadmin_phone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 本地时间 HH:MM
    #[serde(default = "default_daily_at")]
    pub daily_at: String,
}

impl SchedulerConfig {
    pub fn daily_time(&self) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.daily_at, "%H:%M").map_err(|e| {
            AppError::ConfigError(format!(
                "scheduler.daily_at must be HH:MM, got {:?}: {e}",
                self.daily_at
            ))
        })
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            daily_at: default_daily_at(),
        }
    }
}

fn default_callmebot_base_url() -> String {
    "https://api.callmebot.com".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_superadmin_phone() -> String {
    "+237680371957".to_string()
}

fn default_daily_at() -> String {
    "00:00".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件不存在时完全依赖环境变量和默认值
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::from_toml_str(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{config_path} not found, using environment and defaults");
                Self::default()
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Unable to read config file {config_path}: {e}"
                )));
            }
        };

        // 环境变量始终覆盖文件中的值
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> AppResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {e}")))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        // PORT 兼容旧部署，SERVER_PORT 优先
        for key in ["PORT", "SERVER_PORT"] {
            if let Ok(v) = env::var(key)
                && let Ok(p) = v.parse()
            {
                self.server.port = p;
            }
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("CALLMEBOT_KEY") {
            self.whatsapp.api_key = v;
        }
        if let Ok(v) = env::var("CALLMEBOT_BASE_URL") {
            self.whatsapp.base_url = v;
        }
        if let Ok(v) = env::var("WHATSAPP_TIMEOUT_SECS")
            && let Ok(n) = v.parse()
        {
            self.whatsapp.timeout_secs = n;
        }
        if let Ok(v) = env::var("SUPERADMIN_PHONE") {
            self.whatsapp.superadmin_phone = v;
        }
        if let Ok(v) = env::var("DAILY_CODES_ENABLED")
            && let Ok(b) = v.parse()
        {
            self.scheduler.enabled = b;
        }
        if let Ok(v) = env::var("DAILY_CODES_AT") {
            self.scheduler.daily_at = v;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        self.scheduler.daily_time()?;
        if self.whatsapp.timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "whatsapp.timeout_secs must be greater than 0".to_string(),
            ));
        }
        validate_international_phone(&self.whatsapp.superadmin_phone)
            .map_err(|e| AppError::ConfigError(format!("whatsapp.superadmin_phone: {e}")))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 4000,
            },
            database: DatabaseConfig {
                url: "sqlite://monbillet.db?mode=rwc".to_string(),
                max_connections: 5,
            },
            whatsapp: WhatsAppConfig::default(),
            scheduler: SchedulerConfig::default(),
        }
    }
}
