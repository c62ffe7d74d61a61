use crate::domain::input::{coerce_int, coerce_name, kind_of};
use crate::domain::person::Person;
use crate::utils::error::{RecordError, Result};
use crate::utils::validation;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const REQUIRED_KEYS: [&str; 4] = ["employee_id", "first_name", "last_name", "salary"];

static DELIMITED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\s*;([^;]+);([^;]+);([^;]*);\s*([0-9]+)\s*$")
        .expect("delimited pattern is valid")
});

/// Flat wire shape of an employee, as written by `to_json` and `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub salary: u64,
}

/// An employee: a validated [`Person`] plus a fixed identifier and a salary.
///
/// Every factory funnels into the same checks, so an `Employee` value always
/// holds valid names, a positive id and a non-negative salary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "EmployeeRecord", try_from = "HashMap<String, Value>")]
pub struct Employee {
    employee_id: u64,
    person: Person,
    salary: u64,
}

impl Employee {
    pub fn from_fields(
        employee_id: i64,
        first_name: &str,
        last_name: &str,
        patronymic: Option<&str>,
        salary: i64,
    ) -> Result<Self> {
        let person = Person::new(first_name, last_name, patronymic)?;
        Self::build(employee_id, person, salary)
    }

    /// Parses `id;first_name;last_name;patronymic;salary`.
    ///
    /// Segments are trimmed and a blank patronymic segment means no patronymic.
    pub fn from_delimited_text(text: &str) -> Result<Self> {
        let caps = DELIMITED_PATTERN.captures(text).ok_or_else(|| {
            RecordError::validation(
                "String must be in format: 'id;first_name;last_name;patronymic;salary'",
            )
        })?;

        let parse_int = |raw: &str| {
            raw.parse::<i64>()
                .map_err(|e| RecordError::validation(format!("Invalid data format in string: {}", e)))
        };
        let employee_id = parse_int(&caps[1])?;
        let salary = parse_int(&caps[5])?;

        let person = Person::new(&caps[2], &caps[3], Some(&caps[4]))?;
        Self::build(employee_id, person, salary)
    }

    /// Parses a JSON object with `employee_id`, `first_name`, `last_name`,
    /// `salary` and an optional `patronymic`.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| RecordError::validation(format!("Invalid JSON format: {}", e)))?;

        match value {
            Value::Object(object) => Self::from_keyed(|key| object.get(key), "JSON"),
            other => Err(RecordError::validation(format!(
                "JSON must be an object, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// `[employee_id, first_name, last_name, patronymic_or_null, salary]`
    pub fn from_sequence(items: &[Value]) -> Result<Self> {
        let [employee_id, first_name, last_name, patronymic, salary] = items else {
            return Err(RecordError::validation(format!(
                "Sequence must have exactly 5 elements, got {}",
                items.len()
            )));
        };

        let type_error =
            |reason: String| RecordError::validation(format!("Invalid data types in sequence: {}", reason));
        let employee_id = coerce_int(employee_id).map_err(type_error)?;
        let salary = coerce_int(salary).map_err(type_error)?;

        let person = Self::person_from_values(first_name, last_name, Some(patronymic))?;
        Self::build(employee_id, person, salary)
    }

    pub fn from_mapping(map: &HashMap<String, Value>) -> Result<Self> {
        Self::from_keyed(|key| map.get(key), "mapping")
    }

    /// Auto-detects the text encoding: `{...}` is JSON, anything else is
    /// delimited text.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            tracing::debug!("Parsing employee from JSON text");
            Self::from_json(trimmed)
        } else {
            tracing::debug!("Parsing employee from delimited text");
            Self::from_delimited_text(text)
        }
    }

    /// Dispatches on the runtime shape: arrays are sequences, objects are mappings.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => Self::from_sequence(items),
            Value::Object(object) => Self::from_keyed(|key| object.get(key), "mapping"),
            other => Err(RecordError::validation(format!(
                "Unsupported input: expected an array or an object, got {}",
                kind_of(other)
            ))),
        }
    }

    fn from_keyed<'a>(lookup: impl Fn(&str) -> Option<&'a Value>, source: &str) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| {
                RecordError::validation(format!("Missing required key in {}: {}", source, key))
            })
        };
        let employee_id = require(REQUIRED_KEYS[0])?;
        let first_name = require(REQUIRED_KEYS[1])?;
        let last_name = require(REQUIRED_KEYS[2])?;
        let salary = require(REQUIRED_KEYS[3])?;

        let type_error = |reason: String| {
            RecordError::validation(format!("Invalid data types in {}: {}", source, reason))
        };
        let employee_id = coerce_int(employee_id).map_err(type_error)?;
        let salary = coerce_int(salary).map_err(type_error)?;

        let person = Self::person_from_values(first_name, last_name, lookup("patronymic"))?;
        Self::build(employee_id, person, salary)
    }

    fn person_from_values(
        first_name: &Value,
        last_name: &Value,
        patronymic: Option<&Value>,
    ) -> Result<Person> {
        let first_name = coerce_name(first_name, false)?;
        let last_name = coerce_name(last_name, false)?;
        let patronymic = match patronymic {
            Some(value) => coerce_name(value, true)?,
            None => None,
        };
        Person::new(
            first_name.as_deref().unwrap_or_default(),
            last_name.as_deref().unwrap_or_default(),
            patronymic.as_deref(),
        )
    }

    fn build(employee_id: i64, person: Person, salary: i64) -> Result<Self> {
        Ok(Self {
            employee_id: Self::validate_employee_id(employee_id)?,
            person,
            salary: Self::validate_salary(salary)?,
        })
    }

    pub fn validate_employee_id(employee_id: i64) -> Result<u64> {
        validation::validate_employee_id(employee_id)
    }

    pub fn validate_salary(salary: i64) -> Result<u64> {
        validation::validate_salary(salary)
    }

    pub fn employee_id(&self) -> u64 {
        self.employee_id
    }

    pub fn salary(&self) -> u64 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: i64) -> Result<()> {
        self.salary = Self::validate_salary(salary)?;
        Ok(())
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> &str {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.person.last_name()
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.person.patronymic()
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.person.set_last_name(value)
    }

    pub fn set_patronymic(&mut self, value: Option<&str>) -> Result<()> {
        self.person.set_patronymic(value)
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    pub fn short_info(&self) -> String {
        format!("ID: {}, Salary: {}", self.employee_id, self.salary)
    }

    pub fn to_record(&self) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: self.employee_id,
            first_name: self.person.first_name().to_string(),
            last_name: self.person.last_name().to_string(),
            patronymic: self.person.patronymic().map(str::to_string),
            salary: self.salary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Inverse of [`Employee::from_delimited_text`].
    pub fn to_delimited(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.employee_id,
            self.person.first_name(),
            self.person.last_name(),
            self.person.patronymic().unwrap_or_default(),
            self.salary
        )
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee {}: {}, Salary: {}",
            self.employee_id,
            self.full_name(),
            self.salary
        )
    }
}

// A bare person is never equal to an employee, even with the same names.
impl PartialEq<Person> for Employee {
    fn eq(&self, _other: &Person) -> bool {
        false
    }
}

impl PartialEq<Employee> for Person {
    fn eq(&self, _other: &Employee) -> bool {
        false
    }
}

impl FromStr for Employee {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&Value> for Employee {
    type Error = RecordError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl TryFrom<HashMap<String, Value>> for Employee {
    type Error = RecordError;

    fn try_from(map: HashMap<String, Value>) -> Result<Self> {
        Self::from_mapping(&map)
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        employee.to_record()
    }
}
