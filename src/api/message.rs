use super::{ApiClient, ApiResult};
use crate::model::{Message, MessageDraft};

pub async fn list(api: &ApiClient) -> ApiResult<Vec<Message>> {
    api.get("/messages").await
}

pub async fn send(api: &ApiClient, draft: &MessageDraft) -> ApiResult<Message> {
    api.post("/messages", draft).await
}
