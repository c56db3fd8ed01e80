use super::{ApiClient, ApiResult};
use crate::model::{Employee, EmployeeDraft, StatusChange};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Employee>> {
    api.get("/employees").await
}

pub async fn create(api: &ApiClient, draft: &EmployeeDraft) -> ApiResult<Employee> {
    api.post("/employees", draft).await
}

pub async fn update(api: &ApiClient, id: u64, draft: &EmployeeDraft) -> ApiResult<Employee> {
    api.put(&format!("/employees/{id}"), draft).await
}

pub async fn delete(api: &ApiClient, id: u64) -> ApiResult<()> {
    api.delete(&format!("/employees/{id}")).await
}

/// Activates or deactivates an employee, optionally with the planned
/// inactive window.
pub async fn set_status(api: &ApiClient, id: u64, change: &StatusChange) -> ApiResult<Employee> {
    api.patch(&format!("/employees/{id}/status"), change).await
}
