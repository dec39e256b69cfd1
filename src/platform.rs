//! Host platform detection for display formatting

use std::fmt;
use std::str::FromStr;

/// Platform a hotkey label is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Linux
        }
    }

    /// Whether this is the Apple desktop platform
    pub fn is_apple_desktop(&self) -> bool {
        matches!(self, Platform::MacOS)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOS => write!(f, "macos"),
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

/// Unrecognized platform name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}', expected macos, windows or linux")]
pub struct ParsePlatformError(String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "macos" | "osx" | "mac" => Ok(Platform::MacOS),
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_macos_is_apple_desktop() {
        assert!(Platform::MacOS.is_apple_desktop());
        assert!(!Platform::Windows.is_apple_desktop());
        assert!(!Platform::Linux.is_apple_desktop());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("OSX".parse::<Platform>(), Ok(Platform::MacOS));
        assert_eq!(" win ".parse::<Platform>(), Ok(Platform::Windows));
        assert_eq!("linux".parse::<Platform>(), Ok(Platform::Linux));
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for platform in [Platform::MacOS, Platform::Windows, Platform::Linux] {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }
}
