use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::model::{Leave, LeaveDraft, LeaveStatus};

#[derive(Debug, Serialize)]
struct StatusBody {
    status: LeaveStatus,
}

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Leave>> {
    api.get("/leaves").await
}

pub async fn create(api: &ApiClient, draft: &LeaveDraft) -> ApiResult<Leave> {
    api.post("/leaves", draft).await
}

/// Approves or denies a pending request. The server rejects transitions
/// out of a terminal status; the UI never offers them.
pub async fn set_status(api: &ApiClient, id: u64, status: LeaveStatus) -> ApiResult<Leave> {
    api.patch(&format!("/leaves/{id}/status"), &StatusBody { status })
        .await
}
