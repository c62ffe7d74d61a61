pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::{ImportReport, InputFormat, OutputFormat, RecordImporter};
pub use config::{toml_config::TomlConfig, Settings};
pub use domain::{Employee, EmployeeRecord, Person};
pub use utils::error::{RecordError, Result};
