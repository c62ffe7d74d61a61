use crate::config::toml_config::TomlConfig;
use crate::config::{ConfigProvider, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "employee-records")]
#[command(about = "Validate employee records from delimited text or JSON")]
pub struct CliConfig {
    #[arg(long, help = "Input file (reads stdin when omitted)")]
    pub input: Option<String>,

    #[arg(long, help = "Input format: auto, delimited, json, json-lines")]
    pub format: Option<String>,

    #[arg(long, help = "Output format: text, json, delimited")]
    pub output: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Stop at the first invalid record")]
    pub fail_fast: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::layered(&[&file, self])
            }
            None => Settings::layered(&[self]),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn input_format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    fn output_format(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn fail_fast(&self) -> Option<bool> {
        // 只有明確指定時才覆蓋設定檔
        self.fail_fast.then_some(true)
    }

    fn log_level(&self) -> Option<&str> {
        self.verbose.then_some("debug")
    }

    fn log_json(&self) -> Option<bool> {
        self.log_json.then_some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{InputFormat, OutputFormat};

    #[test]
    fn test_parse_args() {
        let config = CliConfig::parse_from([
            "employee-records",
            "--format",
            "json",
            "--output",
            "delimited",
            "--fail-fast",
        ]);
        let settings = config.resolve().unwrap();
        assert_eq!(settings.input_format, InputFormat::Json);
        assert_eq!(settings.output_format, OutputFormat::Delimited);
        assert!(settings.fail_fast);
        assert_eq!(settings.input_path, None);
    }

    #[test]
    fn test_bad_format_flag() {
        let config = CliConfig::parse_from(["employee-records", "--format", "xml"]);
        assert!(config.resolve().is_err());
    }
}
