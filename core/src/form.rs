//! Add/edit form staging.
//!
//! Values are held as text while being edited, whatever their final type.
//! Age and salary input is filtered to numeric characters as it is typed;
//! required-field and number checks happen only when the form is converted
//! into an outgoing payload.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{Employee, EmployeeFields};

/// One of the four editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Salary,
    Hometown,
}

impl FormField {
    /// Display order of the form.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Age,
        FormField::Salary,
        FormField::Hometown,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Salary => "salary",
            FormField::Hometown => "hometown",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Salary => "Salary",
            FormField::Hometown => "Hometown",
        }
    }

    fn filter(self, value: &str) -> String {
        match self {
            FormField::Name | FormField::Hometown => value.to_string(),
            FormField::Age => value.chars().filter(char::is_ascii_digit).collect(),
            FormField::Salary => {
                let mut seen_point = false;
                value
                    .chars()
                    .filter(|c| match c {
                        '0'..='9' => true,
                        '.' if !seen_point => {
                            seen_point = true;
                            true
                        }
                        _ => false,
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Why the form cannot be submitted yet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(FormField),
    #[error("{0} must be a number")]
    NotANumber(FormField),
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::Missing(field) | FormError::NotANumber(field) => *field,
        }
    }
}

/// Staged, not-yet-submitted values for create or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    name: String,
    age: String,
    salary: String,
    hometown: String,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Salary => &self.salary,
            FormField::Hometown => &self.hometown,
        }
    }

    /// Replace one field. Numeric fields drop non-numeric characters.
    pub fn set(&mut self, field: FormField, value: &str) {
        let value = field.filter(value);
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Salary => self.salary = value,
            FormField::Hometown => self.hometown = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Convert to an outgoing payload, reporting the first field in display
    /// order that blocks submission.
    pub fn to_fields(&self) -> Result<EmployeeFields, FormError> {
        for field in FormField::ALL {
            if self.get(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        let age = self
            .age
            .parse::<u32>()
            .map_err(|_| FormError::NotANumber(FormField::Age))?;
        let salary = self
            .salary
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or(FormError::NotANumber(FormField::Salary))?;
        Ok(EmployeeFields {
            name: self.name.clone(),
            age,
            salary,
            hometown: self.hometown.clone(),
        })
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age.to_string(),
            salary: employee.salary.to_string(),
            hometown: employee.hometown.clone(),
        }
    }
}
