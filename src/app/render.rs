use crate::domain::Employee;
use crate::utils::error::{RecordError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Delimited,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "delimited"];
}

impl FromStr for OutputFormat {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "delimited" => Ok(Self::Delimited),
            other => Err(RecordError::config(format!(
                "Unknown output format '{}'. Valid formats: {}",
                other,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

pub fn render_employees(employees: &[Employee], format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Text => employees
            .iter()
            .map(|employee| employee.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        // 與原本 JSON 儲存格式相同的陣列
        OutputFormat::Json => serde_json::to_string_pretty(employees)?,
        OutputFormat::Delimited => employees
            .iter()
            .map(Employee::to_delimited)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Employee> {
        vec![
            Employee::from_fields(1, "Ivan", "Petrov", Some("Sergeevich"), 50000).unwrap(),
            Employee::from_fields(2, "Анна", "Иванова", None, 42000).unwrap(),
        ]
    }

    #[test]
    fn test_render_text() {
        let output = render_employees(&staff(), OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "Employee 1: Petrov Ivan Sergeevich, Salary: 50000\nEmployee 2: Иванова Анна, Salary: 42000"
        );
    }

    #[test]
    fn test_render_delimited() {
        let output = render_employees(&staff(), OutputFormat::Delimited).unwrap();
        assert_eq!(output, "1;Ivan;Petrov;Sergeevich;50000\n2;Анна;Иванова;;42000");
    }

    #[test]
    fn test_render_json_reads_back() {
        let output = render_employees(&staff(), OutputFormat::Json).unwrap();
        let employees: Vec<Employee> = serde_json::from_str(&output).unwrap();
        assert_eq!(employees, staff());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("Delimited".parse::<OutputFormat>().unwrap(), OutputFormat::Delimited);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
