//! Client core for the employee records service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and layers the page's state
//! and user actions on top through the `Transport` and `Dialogs` seams.
//!
//! # Design
//! - `EmployeeClient` is stateless; it holds only the collection URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `EmployeeApp` owns the view state and turns each user action into at
//!   most one mutating call followed by a full reload.
//! - `view` renders that state as text; front ends decide how to show it.

pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

pub use app::{DeleteOutcome, Dialogs, EmployeeApp, SubmitOutcome};
pub use client::{EmployeeClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use form::{EmployeeForm, FormError, FormField};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{Employee, EmployeeFields, EmployeeId};
pub use view::PageView;
