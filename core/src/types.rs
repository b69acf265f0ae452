//! Domain DTOs for the employee records API.
//!
//! # Design
//! Records fetched from the service (`Employee`) and payloads sent to it
//! (`EmployeeFields`) are separate types. Only the service assigns ids, so
//! the outgoing payload has no `id` field at all; an id travels back to the
//! server solely as a path parameter.
//!
//! The mock-server crate defines its own copies of these shapes; integration
//! tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the service. Opaque to the client.
pub type EmployeeId = i64;

/// An employee record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub hometown: String,
}

impl Employee {
    /// The editable part of the record, without its id.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            age: self.age,
            salary: self.salary,
            hometown: self.hometown.clone(),
        }
    }
}

/// Request payload for both create and update.
///
/// Update replaces all four fields on the server, so there is no partial
/// variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub hometown: String,
}
