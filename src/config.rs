//! Configuration management for the contact assistant.
//!
//! This module handles loading configuration from environment variables.
//! It avoids polluting stdout (which carries the conversation) by using
//! `dotenvy` to read a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt written before each read.
pub const DEFAULT_PROMPT: &str = "Please enter request: ";

/// Default tracing filter when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt written to stdout before each line is read
    pub prompt: String,

    /// Fallback log level when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Please enter request: ").
    ///   Must not be blank when set.
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt = match env::var("ASSISTANT_PROMPT") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ASSISTANT_PROMPT".to_string(),
                        reason: "Cannot be blank".to_string(),
                    });
                }
                val
            }
            Err(_) => DEFAULT_PROMPT.to_string(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
