use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::fmt;

/// A person with validated first name, last name and optional patronymic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    first_name: String,
    last_name: String,
    patronymic: Option<String>,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, patronymic: Option<&str>) -> Result<Self> {
        Ok(Self {
            first_name: Self::required_name(Some(first_name))?,
            last_name: Self::required_name(Some(last_name))?,
            patronymic: Self::validate_name(patronymic, true)?,
        })
    }

    /// See [`validation::validate_name`].
    pub fn validate_name(value: Option<&str>, is_patronymic: bool) -> Result<Option<String>> {
        validation::validate_name(value, is_patronymic)
    }

    pub(crate) fn required_name(value: Option<&str>) -> Result<String> {
        // 非父稱欄位成功時一定有值
        Self::validate_name(value, false).map(Option::unwrap_or_default)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.first_name = Self::required_name(Some(value))?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.last_name = Self::required_name(Some(value))?;
        Ok(())
    }

    pub fn set_patronymic(&mut self, value: Option<&str>) -> Result<()> {
        self.patronymic = Self::validate_name(value, true)?;
        Ok(())
    }

    /// `last first [patronymic]`
    pub fn full_name(&self) -> String {
        let mut parts = vec![self.last_name.as_str(), self.first_name.as_str()];
        if let Some(patronymic) = &self.patronymic {
            parts.push(patronymic);
        }
        parts.join(" ")
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person: {}", self.full_name())
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<()> {
        Self::required_name(Some(&self.first_name))?;
        Self::required_name(Some(&self.last_name))?;
        Self::validate_name(self.patronymic.as_deref(), true)?;
        Ok(())
    }
}
