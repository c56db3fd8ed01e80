use super::{ApiClient, ApiResult};
use crate::model::{Salary, SalaryDraft};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Salary>> {
    api.get("/salaries").await
}

/// All salary records of one employee, newest first. Answers 404 when
/// the employee has no salary on record.
pub async fn for_employee(api: &ApiClient, employee_id: u64) -> ApiResult<Vec<Salary>> {
    api.get(&format!("/salaries/employee/{employee_id}")).await
}

pub async fn create(api: &ApiClient, draft: &SalaryDraft) -> ApiResult<Salary> {
    api.post("/salaries", draft).await
}

pub async fn update(api: &ApiClient, id: u64, draft: &SalaryDraft) -> ApiResult<Salary> {
    api.put(&format!("/salaries/{id}"), draft).await
}
