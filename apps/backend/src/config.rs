//! Service configuration loaded from the environment.

use std::path::PathBuf;

use hifz_core::{LessonPosition, JUZ_COUNT, SURAH_COUNT};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Lesson position assumed when a request omits it.
    pub default_position: LessonPosition,
    /// JSON file replacing the built-in surah table.
    pub surah_table_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_position: LessonPosition::default(),
            surah_table_path: None,
        }
    }
}

impl Config {
    /// Read configuration from environment variables (after loading `.env`).
    ///
    /// Optional env vars:
    /// - HOST: bind address (default 0.0.0.0)
    /// - PORT: bind port (default 3000)
    /// - DEFAULT_CURRENT_SURAH: surah of today's lesson, 1-114 (default 1)
    /// - DEFAULT_CURRENT_JUZ: Juz of today's lesson, 1-30 (default 30)
    /// - SURAH_TABLE_PATH: JSON surah table to load instead of the built-in one
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a port number",
                value,
            })?,
            None => defaults.port,
        };

        let current_surah_id = match lookup("DEFAULT_CURRENT_SURAH") {
            Some(value) => match value.trim().parse::<u32>().ok() {
                Some(id) if (1..=SURAH_COUNT as u32).contains(&id) => id,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DEFAULT_CURRENT_SURAH",
                        expected: "a surah id between 1 and 114",
                        value,
                    })
                }
            },
            None => defaults.default_position.current_surah_id,
        };

        let current_juz = match lookup("DEFAULT_CURRENT_JUZ") {
            Some(value) => match value.trim().parse::<u8>().ok() {
                Some(juz) if (1..=JUZ_COUNT).contains(&juz) => juz,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DEFAULT_CURRENT_JUZ",
                        expected: "a Juz number between 1 and 30",
                        value,
                    })
                }
            },
            None => defaults.default_position.current_juz,
        };

        let surah_table_path = lookup("SURAH_TABLE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            default_position: LessonPosition {
                current_surah_id,
                current_juz,
            },
            surah_table_path,
        })
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
