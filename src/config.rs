//! Configuration loading from the environment

use crate::platform::{ParsePlatformError, Platform};

/// Environment variable overriding the display platform
pub const PLATFORM_VAR: &str = "HOTKEY_PLATFORM";

/// Environment variable setting the key input channel size
pub const CHANNEL_CAPACITY_VAR: &str = "HOTKEY_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Platform used when formatting display labels
    pub platform: Platform,

    /// Capacity of the key input channel feeding the dispatcher
    pub channel_capacity: usize,
}

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOTKEY_PLATFORM: {0}")]
    Platform(#[from] ParsePlatformError),

    #[error("invalid HOTKEY_CHANNEL_CAPACITY '{0}': expected a positive integer")]
    ChannelCapacity(String),
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` to read variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform = match lookup(PLATFORM_VAR) {
            Some(value) => value.parse()?,
            None => Platform::current(),
        };

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::ChannelCapacity(value)),
            },
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self {
            platform,
            channel_capacity,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
