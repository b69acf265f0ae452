//! Application state and user actions.
//!
//! # Design
//! `EmployeeApp` is the single owned record behind the view: the fetched
//! collection and count, the staged form, and the edit target. Each user
//! action maps to at most one mutating HTTP call, and every successful
//! mutation is followed by a full reload, so the server stays the source of
//! truth.
//!
//! Failures are never propagated out of an action. They are logged with
//! their cause and reported to the user once through `Dialogs::alert` with a
//! fixed, operation-specific message.

use tracing::{debug, error, info};

use crate::client::EmployeeClient;
use crate::error::ApiError;
use crate::form::{EmployeeForm, FormError, FormField};
use crate::http::Transport;
use crate::types::{Employee, EmployeeId};

pub const FETCH_FAILED: &str = "Error fetching employees. Make sure the server is running!";
pub const ADDED: &str = "Employee added successfully!";
pub const UPDATED: &str = "Employee updated successfully!";
pub const SAVE_FAILED: &str = "Error saving employee!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this employee?";
pub const DELETED: &str = "Employee deleted successfully!";
pub const DELETE_FAILED: &str = "Error deleting employee!";

/// Blocking user dialogs.
pub trait Dialogs {
    /// Show a message and return once the user has dismissed it.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<D: Dialogs + ?Sized> Dialogs for &mut D {
    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// How a submit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(EmployeeId),
    /// The form is incomplete; nothing was sent.
    Blocked(FormError),
    Failed,
}

/// How a delete ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    Failed,
}

pub struct EmployeeApp<T, D> {
    client: EmployeeClient,
    transport: T,
    dialogs: D,
    employees: Vec<Employee>,
    count: u64,
    form: EmployeeForm,
    editing: Option<EmployeeId>,
}

impl<T: Transport, D: Dialogs> EmployeeApp<T, D> {
    /// Fresh state: empty collection, zero count, empty form. Call `load`
    /// to populate it.
    pub fn new(client: EmployeeClient, transport: T, dialogs: D) -> Self {
        Self {
            client,
            transport,
            dialogs,
            employees: Vec::new(),
            count: 0,
            form: EmployeeForm::new(),
            editing: None,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn edit_target(&self) -> Option<EmployeeId> {
        self.editing
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    /// Refresh the collection and the count. Each fetch is independent: a
    /// failure leaves that piece of state as it was.
    pub fn load(&mut self) {
        match self.fetch_employees() {
            Ok(employees) => self.employees = employees,
            Err(err) => {
                error!(error = %err, "fetching employees failed");
                self.dialogs.alert(FETCH_FAILED);
            }
        }
        match self.fetch_count() {
            Ok(count) => self.count = count,
            Err(err) => error!(error = %err, "fetching employee count failed"),
        }
    }

    pub fn update_field(&mut self, field: FormField, value: &str) {
        self.form.set(field, value);
    }

    /// Create a new record, or update the edit target when one is set.
    pub fn submit(&mut self) -> SubmitOutcome {
        let fields = match self.form.to_fields() {
            Ok(fields) => fields,
            Err(err) => {
                debug!(%err, "submit blocked");
                return SubmitOutcome::Blocked(err);
            }
        };

        let result = match self.editing {
            Some(id) => self
                .client
                .build_update_employee(id, &fields)
                .and_then(|req| self.transport.execute(req))
                .and_then(|resp| self.client.parse_update_employee(resp))
                .map(|_| SubmitOutcome::Updated(id)),
            None => self
                .client
                .build_create_employee(&fields)
                .and_then(|req| self.transport.execute(req))
                .and_then(|resp| self.client.parse_create_employee(resp))
                .map(|_| SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                match outcome {
                    SubmitOutcome::Updated(id) => {
                        info!(id, "employee updated");
                        self.dialogs.alert(UPDATED);
                    }
                    _ => {
                        info!("employee added");
                        self.dialogs.alert(ADDED);
                    }
                }
                self.editing = None;
                self.form.clear();
                self.load();
                outcome
            }
            Err(err) => {
                error!(error = %err, "saving employee failed");
                self.dialogs.alert(SAVE_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete a record after the user confirms.
    pub fn delete(&mut self, id: EmployeeId) -> DeleteOutcome {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            return DeleteOutcome::Declined;
        }

        let req = self.client.build_delete_employee(id);
        let result = self
            .transport
            .execute(req)
            .and_then(|resp| self.client.parse_delete_employee(resp));

        match result {
            Ok(()) => {
                info!(id, "employee deleted");
                self.dialogs.alert(DELETED);
                self.load();
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!(id, error = %err, "deleting employee failed");
                self.dialogs.alert(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }

    /// Stage `employee` in the form; the next submit updates it.
    pub fn begin_edit(&mut self, employee: &Employee) {
        self.form = EmployeeForm::from(employee);
        self.editing = Some(employee.id);
    }

    pub fn cancel_edit(&mut self) {
        self.form.clear();
        self.editing = None;
    }

    fn fetch_employees(&mut self) -> Result<Vec<Employee>, ApiError> {
        let req = self.client.build_list_employees();
        debug!(path = %req.path, "fetching employees");
        let resp = self.transport.execute(req)?;
        self.client.parse_list_employees(resp)
    }

    fn fetch_count(&mut self) -> Result<u64, ApiError> {
        let req = self.client.build_count_employees();
        debug!(path = %req.path, "fetching employee count");
        let resp = self.transport.execute(req)?;
        self.client.parse_count_employees(resp)
    }
}
