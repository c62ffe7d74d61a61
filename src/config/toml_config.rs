use crate::app::{InputFormat, OutputFormat};
use crate::config::{ConfigProvider, LOG_LEVELS};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub fail_fast: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| RecordError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_ref()?.path.as_deref()
    }

    fn input_format(&self) -> Option<&str> {
        self.input.as_ref()?.format.as_deref()
    }

    fn output_format(&self) -> Option<&str> {
        self.output.as_ref()?.format.as_deref()
    }

    fn fail_fast(&self) -> Option<bool> {
        self.validation.as_ref()?.fail_fast
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    fn log_json(&self) -> Option<bool> {
        self.logging.as_ref()?.json
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validate_path("input.path", path)?;
        }
        // 與 Settings::layered 使用相同的解析規則 (不分大小寫、接受別名)
        if let Some(format) = self.input_format() {
            format.parse::<InputFormat>()?;
        }
        if let Some(format) = self.output_format() {
            format.parse::<OutputFormat>()?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", &level.to_ascii_lowercase(), &LOG_LEVELS)?;
        }
        Ok(())
    }
}
