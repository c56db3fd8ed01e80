//! Typed client for the EMS REST API.
//!
//! All calls go through [`ApiClient`], which carries the resolved base
//! URL and the bearer token of the current session. The token is handed
//! in at construction; nothing in this module reads ambient state.

use derive_more::{Display, Error};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod analytics;
pub mod auth;
pub mod department;
pub mod employee;
pub mod leave;
pub mod message;
pub mod salary;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure taxonomy of a request. `Unauthorized` forces a logout,
/// `NotFound` renders an empty state, the rest surface as a banner.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    #[display(fmt = "Your session has expired. Please sign in again.")]
    Unauthorized,
    #[display(fmt = "Not found")]
    NotFound,
    #[display(fmt = "{}", message)]
    Request { status: u16, message: String },
    #[display(fmt = "Could not reach the server: {}", message)]
    Network { message: String },
    #[display(fmt = "Unexpected response from the server: {}", message)]
    Decode { message: String },
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for the configured API base. `token` comes from the active
    /// session; pass `None` only for the login call itself.
    pub fn new(token: Option<String>) -> Self {
        Self {
            base: crate::config::api_url(),
            token,
        }
    }

    #[cfg(test)]
    pub fn with_base(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| network(path, e))?;
        decode(path, resp).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_body(Request::post(&self.url(path)), path, body).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_body(Request::put(&self.url(path)), path, body).await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_body(Request::patch(&self.url(path)), path, body).await
    }

    /// GET where only the status matters, not the body.
    pub(crate) async fn get_ok(&self, path: &str) -> ApiResult<()> {
        let resp = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| network(path, e))?;
        accept(path, resp).await
    }

    /// POST without a payload, for endpoints that only need the token.
    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        let resp = self
            .authorize(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| network(path, e))?;
        accept(path, resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let resp = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| network(path, e))?;
        accept(path, resp).await
    }

    async fn send_body<B: Serialize, T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let resp = self
            .authorize(req)
            .json(body)
            .map_err(|e| ApiError::Decode {
                message: e.to_string(),
            })?
            .send()
            .await
            .map_err(|e| network(path, e))?;
        decode(path, resp).await
    }
}

fn network(path: &str, err: gloo_net::Error) -> ApiError {
    log::error!("request to {path} failed: {err}");
    ApiError::Network {
        message: err.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> ApiResult<T> {
    if !resp.ok() {
        return Err(status_error(path, resp).await);
    }
    resp.json::<T>().await.map_err(|e| {
        log::error!("decoding response from {path} failed: {e}");
        ApiError::Decode {
            message: e.to_string(),
        }
    })
}

/// Success check for endpoints whose response body is irrelevant.
async fn accept(path: &str, resp: Response) -> ApiResult<()> {
    if resp.ok() {
        Ok(())
    } else {
        Err(status_error(path, resp).await)
    }
}

async fn status_error(path: &str, resp: Response) -> ApiError {
    let status = resp.status();
    match status {
        401 => {
            log::info!("{path} answered 401, session is gone");
            ApiError::Unauthorized
        }
        404 => ApiError::NotFound,
        _ => {
            // The backend reports failures as {"message": "..."}.
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => resp.status_text(),
            };
            log::error!("{path} answered {status}: {message}");
            ApiError::Request { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_urls_from_its_base() {
        let api = ApiClient::with_base("/api", None);
        assert_eq!(api.url("/departments"), "/api/departments");
        assert_eq!(api.url("/employees/7/status"), "/api/employees/7/status");
    }

    #[test]
    fn error_messages_read_well_in_a_banner() {
        let err = ApiError::Request {
            status: 409,
            message: "Department has employees assigned".into(),
        };
        assert_eq!(err.to_string(), "Department has employees assigned");
        assert!(ApiError::Unauthorized.to_string().contains("sign in"));
    }
}
