//! Commands typed at the prompt.

use std::str::FromStr;

use employee_core::form::UnknownField;
use employee_core::{EmployeeId, FormField};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  set <field> <value>   stage a form value (name, age, salary, hometown)
  submit                add the staged employee, or save the one being edited
  edit <id>             load an employee into the form
  cancel                discard the form and stop editing
  delete <id>           delete an employee (asks first)
  refresh               reload the list and count
  help                  show this text
  quit                  exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Submit,
    Edit(EmployeeId),
    Cancel,
    Delete(EmployeeId),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Field(#[from] UnknownField),
    #[error("`{0}` is not an employee id")]
    BadId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(field, value)| (field, value.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::Usage("set <field> <value>"));
                }
                Ok(Command::Set(field.parse()?, value.to_string()))
            }
            "submit" | "save" => Ok(Command::Submit),
            "edit" => parse_id(rest, "edit <id>").map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => parse_id(rest, "delete <id>").map(Command::Delete),
            "refresh" | "" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(arg: &str, usage: &'static str) -> Result<EmployeeId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    arg.parse()
        .map_err(|_| CommandError::BadId(arg.to_string()))
}
