use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vantage_session::Session;

use crate::error::ClientError;

/// Default backend origin; override with `VANTAGE_API_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// HTTP client for the dashboard's own backend.
///
/// All outgoing requests are built through [`Self::request`], which is the
/// single credential attachment point — not just authorization-relevant
/// calls.
pub struct BackendClient {
    http: Client,
    base_url: String,
    session: Arc<Session>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    /// Client pointed at `VANTAGE_API_URL`, falling back to the local
    /// development backend.
    pub fn from_env(session: Arc<Session>) -> Self {
        let base_url =
            std::env::var("VANTAGE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, session)
    }

    /// Exchange credentials for a bearer token and establish the session.
    ///
    /// The backend owns authentication; this side only stores what it is
    /// handed. A rejected login leaves the session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .request(Method::POST, "/login")
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "login rejected");
            return Err(ClientError::Rejected { status });
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))?;

        self.session.save_credential(&body.access_token);
        Ok(())
    }

    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientError> {
        let response = self.request(Method::GET, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected { status });
        }
        response
            .json()
            .await
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected { status });
        }
        response
            .json()
            .await
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }

    /// Build a request against the backend origin: correlation id header,
    /// then bearer attachment from the current credential.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::now_v7();
        tracing::debug!(%request_id, %url, "outbound backend request");

        let request = self
            .http
            .request(method, url)
            .header("x-request-id", request_id.to_string());
        attach_credential(request, self.session.credential().as_deref())
    }
}

/// Attach the bearer credential when one is present; forward unmodified
/// otherwise. The caller never learns whether attachment happened — the
/// backend decides what an unauthenticated request may do.
fn attach_credential(request: RequestBuilder, credential: Option<&str>) -> RequestBuilder {
    match credential {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}
