use super::{ApiClient, ApiResult};
use crate::model::Analytics;

pub async fn fetch(api: &ApiClient) -> ApiResult<Analytics> {
    api.get("/analytics").await
}
