//! In-memory stand-in for the employee records service.
//!
//! Serves the same routes as the real backend under `/api/employees`. Ids are
//! assigned from a counter starting at 1 and the list comes back in id order.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const COLLECTION_PATH: &str = "/api/employees";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub hometown: String,
}

/// Body of create and update. Any `id` in the body is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub hometown: String,
}

impl EmployeeInput {
    fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            salary: self.salary,
            hometown: self.hometown,
        }
    }
}

#[derive(Debug)]
pub struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Table>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Table::default()));
    Router::new()
        .route(COLLECTION_PATH, get(list_employees).post(create_employee))
        .route(&format!("{COLLECTION_PATH}/count"), get(count_employees))
        .route(
            &format!("{COLLECTION_PATH}/{{id}}"),
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let table = db.read().await;
    Json(table.rows.values().cloned().collect())
}

async fn count_employees(State(db): State<Db>) -> Json<u64> {
    let table = db.read().await;
    Json(table.rows.len() as u64)
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<EmployeeInput>,
) -> (StatusCode, Json<Employee>) {
    let mut table = db.write().await;
    let id = table.next_id;
    table.next_id += 1;
    let employee = input.into_employee(id);
    table.rows.insert(id, employee.clone());
    info!(id, "employee created");
    (StatusCode::CREATED, Json(employee))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, StatusCode> {
    let table = db.read().await;
    table.rows.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Employee>, StatusCode> {
    let mut table = db.write().await;
    let row = table.rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *row = input.into_employee(id);
    info!(id, "employee updated");
    Ok(Json(row.clone()))
}

/// Removing an unknown id is not an error.
async fn delete_employee(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    if db.write().await.rows.remove(&id).is_some() {
        info!(id, "employee deleted");
    }
    StatusCode::NO_CONTENT
}
