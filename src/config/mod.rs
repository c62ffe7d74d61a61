#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::{InputFormat, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use std::path::PathBuf;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A source of settings. Unset values fall through to the next layer.
pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn input_format(&self) -> Option<&str>;
    fn output_format(&self) -> Option<&str>;
    fn fail_fast(&self) -> Option<bool>;
    fn log_level(&self) -> Option<&str>;
    fn log_json(&self) -> Option<bool>;
}

/// Effective settings after layering every provider over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: Option<PathBuf>,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub fail_fast: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: None,
            input_format: InputFormat::default(),
            output_format: OutputFormat::default(),
            fail_fast: false,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Settings {
    /// 依序套用設定來源，後面的覆蓋前面的
    pub fn layered(providers: &[&dyn ConfigProvider]) -> Result<Self> {
        let mut settings = Self::default();

        for provider in providers {
            if let Some(path) = provider.input_path() {
                settings.input_path = Some(PathBuf::from(path));
            }
            if let Some(format) = provider.input_format() {
                settings.input_format = format.parse()?;
            }
            if let Some(format) = provider.output_format() {
                settings.output_format = format.parse()?;
            }
            if let Some(fail_fast) = provider.fail_fast() {
                settings.fail_fast = fail_fast;
            }
            if let Some(level) = provider.log_level() {
                settings.log_level = level.to_ascii_lowercase();
            }
            if let Some(json) = provider.log_json() {
                settings.log_json = json;
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.level", &self.log_level, &LOG_LEVELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        input_format: Option<&'static str>,
        fail_fast: Option<bool>,
        log_level: Option<&'static str>,
    }

    impl ConfigProvider for Fixed {
        fn input_path(&self) -> Option<&str> {
            None
        }
        fn input_format(&self) -> Option<&str> {
            self.input_format
        }
        fn output_format(&self) -> Option<&str> {
            None
        }
        fn fail_fast(&self) -> Option<bool> {
            self.fail_fast
        }
        fn log_level(&self) -> Option<&str> {
            self.log_level
        }
        fn log_json(&self) -> Option<bool> {
            None
        }
    }

    #[test]
    fn test_later_layers_override() {
        let base = Fixed {
            input_format: Some("json"),
            fail_fast: Some(true),
            log_level: None,
        };
        let top = Fixed {
            input_format: Some("delimited"),
            fail_fast: None,
            log_level: Some("DEBUG"),
        };

        let settings = Settings::layered(&[&base, &top]).unwrap();
        assert_eq!(settings.input_format, InputFormat::Delimited);
        assert!(settings.fail_fast);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let layer = Fixed {
            input_format: None,
            fail_fast: None,
            log_level: Some("loud"),
        };
        assert!(Settings::layered(&[&layer]).is_err());
    }
}
