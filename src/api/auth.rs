use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::model::{Role, User};

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

pub async fn login(api: &ApiClient, email: &str, password: &str) -> ApiResult<LoginResponse> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    api.post("/auth/login", &body).await
}

pub async fn profile(api: &ApiClient) -> ApiResult<User> {
    api.get("/auth/profile").await
}

/// Lightweight token probe. 200 means the session is still good.
pub async fn check(api: &ApiClient) -> ApiResult<()> {
    api.get_ok("/auth/check").await
}

/// Server-side session teardown. Callers drop the local session first
/// and ignore this call's outcome.
pub async fn logout(api: &ApiClient) -> ApiResult<()> {
    api.post_empty("/auth/logout").await
}
