use super::{ApiClient, ApiResult};
use crate::model::{Department, DepartmentDraft};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Department>> {
    api.get("/departments").await
}

pub async fn create(api: &ApiClient, draft: &DepartmentDraft) -> ApiResult<Department> {
    api.post("/departments", draft).await
}

pub async fn update(api: &ApiClient, id: u64, draft: &DepartmentDraft) -> ApiResult<Department> {
    api.put(&format!("/departments/{id}"), draft).await
}

pub async fn delete(api: &ApiClient, id: u64) -> ApiResult<()> {
    api.delete(&format!("/departments/{id}")).await
}
