use crate::domain::Employee;
use crate::utils::error::{RecordError, Result};
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// 每行自動判斷 JSON 或分隔文字
    #[default]
    Auto,
    Delimited,
    /// One JSON document: an array of records or a single record.
    Json,
    JsonLines,
}

impl InputFormat {
    pub const NAMES: [&'static str; 4] = ["auto", "delimited", "json", "json-lines"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Delimited => "delimited",
            Self::Json => "json",
            Self::JsonLines => "json-lines",
        }
    }
}

impl FromStr for InputFormat {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "delimited" => Ok(Self::Delimited),
            "json" => Ok(Self::Json),
            "json-lines" | "jsonl" => Ok(Self::JsonLines),
            other => Err(RecordError::config(format!(
                "Unknown input format '{}'. Valid formats: {}",
                other,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that failed validation. `location` is the 1-based line number for
/// line formats and the 1-based item index for a JSON document.
#[derive(Debug)]
pub struct Rejection {
    pub location: usize,
    pub error: RecordError,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub accepted: Vec<Employee>,
    pub rejected: Vec<Rejection>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordImporter {
    format: InputFormat,
    fail_fast: bool,
}

impl RecordImporter {
    pub fn new(format: InputFormat) -> Self {
        Self {
            format,
            fail_fast: false,
        }
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn import_reader<R: Read>(&self, mut reader: R) -> Result<ImportReport> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.import_str(&input)
    }

    pub fn import_str(&self, input: &str) -> Result<ImportReport> {
        tracing::debug!("Importing employee records as {}", self.format);

        let report = match self.format {
            InputFormat::Auto => self.import_lines(input, Employee::parse)?,
            InputFormat::Delimited => self.import_lines(input, Employee::from_delimited_text)?,
            InputFormat::JsonLines => self.import_lines(input, |line| {
                let value: Value = serde_json::from_str(line).map_err(|e| {
                    RecordError::validation(format!("Invalid JSON format: {}", e))
                })?;
                Employee::from_value(&value)
            })?,
            InputFormat::Json => self.import_document(input)?,
        };

        tracing::info!(
            "Imported {} of {} records ({} rejected)",
            report.accepted.len(),
            report.total(),
            report.rejected.len()
        );
        Ok(report)
    }

    fn import_lines<F>(&self, input: &str, parse: F) -> Result<ImportReport>
    where
        F: Fn(&str) -> Result<Employee>,
    {
        let mut report = ImportReport::default();

        for (index, line) in input.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            self.record(&mut report, index + 1, parse(trimmed))?;
        }

        Ok(report)
    }

    fn import_document(&self, input: &str) -> Result<ImportReport> {
        let document: Value = serde_json::from_str(input)
            .map_err(|e| RecordError::validation(format!("Invalid JSON format: {}", e)))?;

        let mut report = ImportReport::default();
        match &document {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.record(&mut report, index + 1, Employee::from_value(item))?;
                }
            }
            Value::Object(_) => {
                self.record(&mut report, 1, Employee::from_value(&document))?;
            }
            _ => {
                return Err(RecordError::validation(
                    "Unsupported input: JSON document must be an array or an object",
                ))
            }
        }

        Ok(report)
    }

    fn record(
        &self,
        report: &mut ImportReport,
        location: usize,
        outcome: Result<Employee>,
    ) -> Result<()> {
        match outcome {
            Ok(employee) => report.accepted.push(employee),
            Err(error) => {
                tracing::warn!("Record {} rejected: {}", location, error);
                if self.fail_fast {
                    return Err(RecordError::validation(format!(
                        "record {}: {}",
                        location,
                        error.message()
                    )));
                }
                report.rejected.push(Rejection { location, error });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_from_str() {
        assert_eq!("JSON".parse::<InputFormat>().unwrap(), InputFormat::Json);
        assert_eq!("jsonl".parse::<InputFormat>().unwrap(), InputFormat::JsonLines);
        assert!("xml".parse::<InputFormat>().is_err());
    }

    #[test]
    fn test_auto_skips_blank_and_comment_lines() {
        let input = "# staff\n\n7;Ivan;Petrov;;50000\n";
        let report = RecordImporter::default().import_str(input).unwrap();
        assert_eq!(report.accepted.len(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_rejections_keep_line_numbers() {
        let input = "7;Ivan;Petrov;;50000\n8;Anna;;;100\n9;Oleg;Sidorov;;-4\n";
        let report = RecordImporter::new(InputFormat::Delimited)
            .import_str(input)
            .unwrap();
        assert_eq!(report.accepted.len(), 1);
        let locations: Vec<usize> = report.rejected.iter().map(|r| r.location).collect();
        assert_eq!(locations, vec![2, 3]);
    }

    #[test]
    fn test_fail_fast_stops_on_first_rejection() {
        let input = "7;Ivan;Petrov;;50000\nbroken\n";
        let err = RecordImporter::new(InputFormat::Auto)
            .with_fail_fast(true)
            .import_str(input)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().starts_with("record 2:"));
    }

    #[test]
    fn test_json_document_rejects_scalar() {
        let err = RecordImporter::new(InputFormat::Json)
            .import_str("42")
            .unwrap_err();
        assert!(err.message().starts_with("Unsupported input"));
    }
}
