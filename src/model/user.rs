use serde::{Deserialize, Serialize};

/// Account profile returned by `GET /auth/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_name: String,
}
