//! 配置基础设施
//!
//! 启动时从环境变量读取一次：
//!
//! | 变量 | 默认值 |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `DATABASE_URL` | `memory://` |
//! | `DATABASE_MAX_CONNECTIONS` | `20` |
//! | `STATIC_DIR` | `public` |

use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use tracing::{info, warn};

/// 服务配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 绑定地址
    pub host: String,
    /// HTTP 服务端口
    pub port: u16,
    /// `postgres://...` 或 `memory://`
    pub database_url: String,
    /// 连接池大小
    pub database_max_connections: u32,
    /// 浏览器客户端静态资源目录
    pub static_dir: PathBuf,
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Parse { key: String, message: String },
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "memory://".to_string(),
            database_max_connections: 20,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// 从进程环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过查找函数加载，便于测试时不修改进程环境
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let static_dir: String = parse_or(
            &lookup,
            "STATIC_DIR",
            defaults.static_dir.display().to_string(),
        )?;

        let config = Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database_url: parse_or(&lookup, "DATABASE_URL", defaults.database_url)?,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            static_dir: PathBuf::from(static_dir),
        };

        if config.database_url.starts_with("memory:") {
            warn!("DATABASE_URL is memory://, student records will not be persisted");
        }

        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("PORT must be greater than 0".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation("HOST must not be empty".to_string()));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "DATABASE_URL must not be empty".to_string(),
            ));
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::Validation(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
