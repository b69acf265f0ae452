//! Plain-text rendering of the employee page.
//!
//! The layout follows the original single page: title, total count, the
//! add/edit form, then the employee table (or an empty-list hint).

use std::fmt;

use crate::app::{Dialogs, EmployeeApp};
use crate::form::{EmployeeForm, FormField};
use crate::http::Transport;
use crate::types::{Employee, EmployeeId};

pub const TITLE: &str = "Employee Management System";
pub const EMPTY_LIST: &str = "No employees found. Add your first employee!";

const COLUMNS: [&str; 5] = ["ID", "Name", "Age", "Salary", "Hometown"];

/// Borrowed snapshot of everything the page shows.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub employees: &'a [Employee],
    pub count: u64,
    pub form: &'a EmployeeForm,
    pub editing: Option<EmployeeId>,
}

impl<'a> PageView<'a> {
    pub fn of<T: Transport, D: Dialogs>(app: &'a EmployeeApp<T, D>) -> Self {
        Self {
            employees: app.employees(),
            count: app.count(),
            form: app.form(),
            editing: app.edit_target(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_form(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (heading, action) = match self.editing {
            Some(_) => ("Edit Employee", "Update Employee"),
            None => ("Add New Employee", "Add Employee"),
        };
        writeln!(f, "{heading}")?;
        let width = FormField::ALL
            .iter()
            .map(|field| field.placeholder().len())
            .max()
            .unwrap_or(0);
        for field in FormField::ALL {
            writeln!(
                f,
                "  {:<width$} : {}",
                field.placeholder(),
                self.form.get(field)
            )?;
        }
        match self.editing {
            Some(_) => writeln!(f, "  [submit] {action}   [cancel] Cancel"),
            None => writeln!(f, "  [submit] {action}"),
        }
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee List")?;
        if self.employees.is_empty() {
            return writeln!(f, "{EMPTY_LIST}");
        }

        let rows: Vec<[String; 5]> = self.employees.iter().map(row).collect();
        let mut widths = COLUMNS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = COLUMNS.map(String::from);
        write_row(f, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;
        writeln!(f)?;
        writeln!(f, "Total Employees: {}", self.count)?;
        writeln!(f)?;
        self.write_form(f)?;
        writeln!(f)?;
        self.write_list(f)
    }
}

fn row(employee: &Employee) -> [String; 5] {
    [
        employee.id.to_string(),
        employee.name.clone(),
        employee.age.to_string(),
        format_salary(employee.salary),
        employee.hometown.clone(),
    ]
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String; 5],
    widths: &[usize; 5],
) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}

/// `$` plus the en-US grouped amount with at most three fraction digits,
/// e.g. `50000.0` → `$50,000` and `1234.5678` → `$1,234.568`.
pub fn format_salary(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }

    let sign = if amount < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: EmployeeId, name: &str, salary: f64) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            age: 30,
            salary,
            hometown: "X".to_string(),
        }
    }

    #[test]
    fn salary_is_grouped_by_thousands() {
        assert_eq!(format_salary(0.0), "$0");
        assert_eq!(format_salary(999.0), "$999");
        assert_eq!(format_salary(50000.0), "$50,000");
        assert_eq!(format_salary(1234567.0), "$1,234,567");
    }

    #[test]
    fn salary_keeps_up_to_three_fraction_digits() {
        assert_eq!(format_salary(1200.5), "$1,200.5");
        assert_eq!(format_salary(1234.5678), "$1,234.568");
    }

    #[test]
    fn empty_collection_shows_hint() {
        let form = EmployeeForm::new();
        let page = PageView {
            employees: &[],
            count: 0,
            form: &form,
            editing: None,
        };
        let text = page.render();
        assert!(text.contains("Total Employees: 0"));
        assert!(text.contains("Add New Employee"));
        assert!(text.contains(EMPTY_LIST));
        assert!(!text.contains("Hometown |"));
    }

    #[test]
    fn table_has_one_line_per_employee() {
        let employees = vec![employee(1, "Ann", 50000.0), employee(2, "Bob", 61000.0)];
        let form = EmployeeForm::new();
        let page = PageView {
            employees: &employees,
            count: 2,
            form: &form,
            editing: None,
        };
        let text = page.render();
        let list = text.split("Employee List").nth(1).unwrap();
        let lines: Vec<&str> = list.lines().filter(|l| !l.is_empty()).collect();
        // header, rule, two rows
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Ann") && lines[2].contains("$50,000"));
        assert!(lines[3].contains("Bob") && lines[3].contains("$61,000"));
    }

    #[test]
    fn editing_switches_form_labels() {
        let mut form = EmployeeForm::new();
        form.set(FormField::Name, "Ann");
        let page = PageView {
            employees: &[],
            count: 0,
            form: &form,
            editing: Some(1),
        };
        let text = page.render();
        assert!(text.contains("Edit Employee"));
        assert!(text.contains("Update Employee"));
        assert!(text.contains("Cancel"));
        assert!(text.contains("Ann"));
    }

    #[test]
    fn display_matches_render() {
        let employees = vec![employee(3, "Cy", 1200.5)];
        let form = EmployeeForm::new();
        let page = PageView {
            employees: &employees,
            count: 1,
            form: &form,
            editing: None,
        };
        let shown = format!("{page}");
        assert_eq!(shown, page.render());
        assert!(shown.starts_with(TITLE));
        assert!(shown.ends_with("3  | Cy   | 30  | $1,200.5 | X\n"), "{shown}");
    }
}
