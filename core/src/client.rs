//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only the collection URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Any 2xx status counts as success; create and update accept
//! either the echoed record or an empty body.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeFields, EmployeeId};

/// Collection URL of a locally running employee service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/employees";

/// Synchronous, stateless client for the employee API.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl Default for EmployeeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl EmployeeClient {
    /// `base_url` is the collection resource itself, e.g.
    /// `http://localhost:8080/api/employees`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Get, self.base_url.clone())
    }

    pub fn build_count_employees(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Get, format!("{}/count", self.base_url))
    }

    pub fn build_get_employee(&self, id: EmployeeId) -> HttpRequest {
        self.bodiless(HttpMethod::Get, self.member_url(id))
    }

    pub fn build_create_employee(&self, input: &EmployeeFields) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Post, self.base_url.clone(), input)
    }

    pub fn build_update_employee(
        &self,
        id: EmployeeId,
        input: &EmployeeFields,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Put, self.member_url(id), input)
    }

    pub fn build_delete_employee(&self, id: EmployeeId) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, self.member_url(id))
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_count_employees(&self, response: HttpResponse) -> Result<u64, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Returns the created record when the server echoes it back.
    pub fn parse_create_employee(
        &self,
        response: HttpResponse,
    ) -> Result<Option<Employee>, ApiError> {
        check_status(&response)?;
        decode_optional(&response.body)
    }

    /// Returns the updated record when the server echoes it back.
    pub fn parse_update_employee(
        &self,
        response: HttpResponse,
    ) -> Result<Option<Employee>, ApiError> {
        check_status(&response)?;
        decode_optional(&response.body)
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn member_url(&self, id: EmployeeId) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn bodiless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json_body(
        &self,
        method: HttpMethod,
        path: String,
        input: &EmployeeFields,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(body).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EmployeeClient {
        EmployeeClient::new("http://localhost:8080/api/employees")
    }

    fn fields() -> EmployeeFields {
        EmployeeFields {
            name: "Grace".to_string(),
            age: 45,
            salary: 98000.0,
            hometown: "Arlington".to_string(),
        }
    }

    #[test]
    fn build_list_targets_collection() {
        let req = client().build_list_employees();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/employees");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_count_targets_count_resource() {
        let req = client().build_count_employees();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/employees/count");
    }

    #[test]
    fn build_get_uses_id_path() {
        let req = client().build_get_employee(12);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/employees/12");
    }

    #[test]
    fn build_create_sends_json_fields() {
        let req = client().build_create_employee(&fields()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/employees");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Grace");
        assert_eq!(body["age"], 45);
        assert_eq!(body["hometown"], "Arlington");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_puts_to_member() {
        let req = client().build_update_employee(3, &fields()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/employees/3");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_has_no_body() {
        let req = client().build_delete_employee(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/employees/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EmployeeClient::new("http://localhost:8080/api/employees/");
        assert_eq!(
            client.build_count_employees().path,
            "http://localhost:8080/api/employees/count"
        );
    }

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(EmployeeClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"name":"A","age":30,"salary":50000,"hometown":"X"}]"#,
        );
        let employees = client().parse_list_employees(response).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "A");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client()
            .parse_list_employees(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_count_reads_bare_integer() {
        let count = client()
            .parse_count_employees(HttpResponse::new(200, "42"))
            .unwrap();
        assert_eq!(count, 42);
    }

    #[test]
    fn parse_get_not_found_is_a_status_error() {
        let err = client()
            .parse_get_employee(HttpResponse::new(404, ""))
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn parse_create_accepts_echo_or_empty_body() {
        let echoed = client()
            .parse_create_employee(HttpResponse::new(
                201,
                r#"{"id":5,"name":"Grace","age":45,"salary":98000.0,"hometown":"Arlington"}"#,
            ))
            .unwrap();
        assert_eq!(echoed.map(|e| e.id), Some(5));

        let bare = client()
            .parse_create_employee(HttpResponse::new(200, ""))
            .unwrap();
        assert!(bare.is_none());
    }

    #[test]
    fn parse_create_server_error() {
        let err = client()
            .parse_create_employee(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_update_not_found() {
        let err = client()
            .parse_update_employee(HttpResponse::new(404, ""))
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn parse_delete_accepts_any_2xx() {
        assert!(client().parse_delete_employee(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_employee(HttpResponse::new(200, "")).is_ok());
        assert!(client().parse_delete_employee(HttpResponse::new(500, "")).is_err());
    }
}
