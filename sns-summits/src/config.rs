use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_WINDOW_STEP, DEFAULT_WINDOW_WIDTH};

///
/// Optional settings for a resolver run, read from a `.toml` file. Every key may be left out:
///
/// ```toml
/// summit_offset = 24
/// window_width = 50
/// window_step = 25
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// fixed distance from the window start to the summit start
    pub summit_offset: Option<u32>,
    pub window_width: Option<u32>,
    pub window_step: Option<u32>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid window parameters: width ({width}) and step ({step}) must both be positive")]
    InvalidWindowParams { width: u32, step: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl TryFrom<&Path> for ResolverConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl ResolverConfig {
    ///
    /// Window parameters from this config, falling back to the 50/25 layout for missing keys.
    ///
    pub fn window_params(&self) -> ConfigResult<WindowParams> {
        WindowParams::new(
            self.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH),
            self.window_step.unwrap_or(DEFAULT_WINDOW_STEP),
        )
    }
}

/// Width and step of the sliding windows laid over each origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    pub width: u32,
    pub step: u32,
}

impl WindowParams {
    pub fn new(width: u32, step: u32) -> ConfigResult<Self> {
        if width == 0 || step == 0 {
            return Err(ConfigError::InvalidWindowParams { width, step });
        }
        Ok(WindowParams { width, step })
    }
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            width: DEFAULT_WINDOW_WIDTH,
            step: DEFAULT_WINDOW_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/summits")
            .join(file_name)
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = get_test_path("resolver.toml");
        let config = ResolverConfig::try_from(path.as_path()).unwrap();
        assert_eq!(
            config,
            ResolverConfig {
                summit_offset: Some(24),
                window_width: Some(50),
                window_step: Some(25),
            }
        );
    }

    #[rstest]
    fn test_partial_config_uses_defaults() {
        let config: ResolverConfig = toml::from_str("window_step = 10").unwrap();
        assert_eq!(config.summit_offset, None);
        assert_eq!(
            config.window_params().unwrap(),
            WindowParams {
                width: 50,
                step: 10
            }
        );
    }

    #[rstest]
    fn test_unknown_key_is_rejected() {
        let result: Result<ResolverConfig, _> = toml::from_str("window_size = 50");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_missing_config_file() {
        let path = get_test_path("missing.toml");
        let result = ResolverConfig::try_from(path.as_path());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[rstest]
    #[case(0, 25)]
    #[case(50, 0)]
    fn test_invalid_window_params(#[case] width: u32, #[case] step: u32) {
        assert!(matches!(
            WindowParams::new(width, step),
            Err(ConfigError::InvalidWindowParams { .. })
        ));
    }
}
