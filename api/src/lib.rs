//! # REST client for the Lawn Care Hub backend
//!
//! The single choke point for all HTTP. Every frontend action goes through
//! [`Client`], which attaches the bearer token, performs exactly one attempt
//! per call (no retries, no timeout override), and maps responses through one
//! rule: 2xx ⇒ parse the JSON body, non-2xx ⇒ an [`ApiError`] carrying the
//! server's message when it sent one.
//!
//! ## Operations
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`Client::login`] | `POST /api/auth/login` |
//! | [`Client::fetch_current_user`] | `GET /api/auth/me` |
//! | [`Client::list_standards`] / [`create_standard`](Client::create_standard) / [`update_standard`](Client::update_standard) / [`delete_standard`](Client::delete_standard) | `/api/standards[/:id]` |
//! | [`Client::list_guides`] / [`create_guide`](Client::create_guide) / [`update_guide`](Client::update_guide) / [`delete_guide`](Client::delete_guide) | `/api/sops[/:id]` |
//!
//! Create and update validate the draft locally first and return
//! [`ApiError::Validation`] without touching the network when a required
//! field is missing.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use store::{Guide, ItemDraft, Standard, UserInfo};

mod error;
pub use error::ApiError;

use error::error_from_response;

/// Backend used when `LAWNHUB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://lawn-care-backend-production.up.railway.app";

/// Resolve the backend base URL.
///
/// Native builds read `LAWNHUB_API_URL` from the process environment; WASM
/// builds can only bake it in at compile time via `option_env!`.
pub fn base_url() -> String {
    if let Some(url) = option_env!("LAWNHUB_API_URL") {
        if !url.is_empty() {
            return url.to_string();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(url) = std::env::var("LAWNHUB_API_URL") {
            if !url.is_empty() {
                return url;
            }
        }
    }
    DEFAULT_API_URL.to_string()
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Deserialize)]
struct MeResponse {
    user: UserInfo,
}

/// HTTP client for the backend. Cheap to construct per call site; holds the
/// base URL and the bearer token of the active session, if any.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach the session token; all calls except [`login`](Client::login)
    /// require one to succeed.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.endpoint(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        req.send().await.map_err(|e| {
            tracing::warn!("request failed before a response arrived: {e}");
            ApiError::Network(e.to_string())
        })
    }

    /// 2xx ⇒ parse the JSON body; non-2xx ⇒ map status + body to an error.
    async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let status = res.status();
        if status.is_success() {
            res.json::<T>().await.map_err(|e| ApiError::Api {
                status: status.as_u16(),
                message: format!("Invalid response body: {e}"),
            })
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(error_from_response(status.as_u16(), &body))
        }
    }

    /// Any 2xx counts as a successful delete; the body, if any, is ignored.
    async fn read_empty(res: Response) -> Result<(), ApiError> {
        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(error_from_response(status.as_u16(), &body))
        }
    }

    // ---- auth ----

    /// Exchange credentials for a session token and user profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let req = self
            .http
            .post(self.endpoint("/api/auth/login"))
            .json(&Credentials { email, password });
        let res = self.send(req).await?;

        let status = res.status();
        if status.is_success() {
            return Self::read_json(res).await;
        }
        // Any login rejection is an auth failure, whatever the status.
        let body = res.text().await.unwrap_or_default();
        match error_from_response(status.as_u16(), &body) {
            ApiError::Api { message, .. } => Err(ApiError::Auth(message)),
            err => Err(err),
        }
    }

    /// Validate the session token. Any rejection means the session has
    /// expired and the caller must log out.
    pub async fn fetch_current_user(&self) -> Result<UserInfo, ApiError> {
        let res = self.send(self.request(Method::GET, "/api/auth/me")).await?;

        if res.status().is_success() {
            let me: MeResponse = Self::read_json(res).await?;
            return Ok(me.user);
        }
        if res.status() == StatusCode::UNAUTHORIZED {
            let body = res.text().await.unwrap_or_default();
            return Err(error_from_response(401, &body));
        }
        Err(ApiError::Auth("Session expired".to_string()))
    }

    // ---- standards ----

    pub async fn list_standards(&self) -> Result<Vec<Standard>, ApiError> {
        let res = self.send(self.request(Method::GET, "/api/standards")).await?;
        Self::read_json(res).await
    }

    pub async fn create_standard(&self, draft: &ItemDraft) -> Result<Standard, ApiError> {
        draft
            .validate()
            .map_err(|m| ApiError::Validation(m.to_string()))?;
        let req = self.request(Method::POST, "/api/standards").json(draft);
        let res = self.send(req).await?;
        Self::read_json(res).await
    }

    pub async fn update_standard(&self, id: i64, draft: &ItemDraft) -> Result<Standard, ApiError> {
        draft
            .validate()
            .map_err(|m| ApiError::Validation(m.to_string()))?;
        let req = self
            .request(Method::PUT, &format!("/api/standards/{id}"))
            .json(draft);
        let res = self.send(req).await?;
        Self::read_json(res).await
    }

    pub async fn delete_standard(&self, id: i64) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, &format!("/api/standards/{id}"));
        let res = self.send(req).await?;
        Self::read_empty(res).await
    }

    // ---- guides (SOPs) ----

    pub async fn list_guides(&self) -> Result<Vec<Guide>, ApiError> {
        let res = self.send(self.request(Method::GET, "/api/sops")).await?;
        Self::read_json(res).await
    }

    pub async fn create_guide(&self, draft: &ItemDraft) -> Result<Guide, ApiError> {
        draft
            .validate()
            .map_err(|m| ApiError::Validation(m.to_string()))?;
        let req = self.request(Method::POST, "/api/sops").json(draft);
        let res = self.send(req).await?;
        Self::read_json(res).await
    }

    pub async fn update_guide(&self, id: i64, draft: &ItemDraft) -> Result<Guide, ApiError> {
        draft
            .validate()
            .map_err(|m| ApiError::Validation(m.to_string()))?;
        let req = self
            .request(Method::PUT, &format!("/api/sops/{id}"))
            .json(draft);
        let res = self.send(req).await?;
        Self::read_json(res).await
    }

    pub async fn delete_guide(&self, id: i64) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, &format!("/api/sops/{id}"));
        let res = self.send(req).await?;
        Self::read_empty(res).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_handles_trailing_slash() {
        let client = Client::new("https://example.com/");
        assert_eq!(
            client.endpoint("/api/standards"),
            "https://example.com/api/standards"
        );

        let client = Client::new("https://example.com");
        assert_eq!(client.endpoint("/api/auth/me"), "https://example.com/api/auth/me");
    }

    #[test]
    fn bearer_token_is_attached() {
        let client = Client::new("https://example.com").with_token("tok-123");
        let req = client
            .request(Method::GET, "/api/standards")
            .build()
            .unwrap();
        assert_eq!(
            req.headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer tok-123")
        );
    }

    #[test]
    fn no_token_means_no_auth_header() {
        let client = Client::new("https://example.com");
        let req = client.request(Method::GET, "/api/sops").build().unwrap();
        assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_network() {
        // An unroutable base URL: if validation did not short-circuit, these
        // calls would fail with a Network error instead.
        let client = Client::new("http://127.0.0.1:0").with_token("tok");
        let empty = ItemDraft::default();

        let err = client.create_standard(&empty).await.unwrap_err();
        assert_eq!(err, ApiError::Validation("Title is required".to_string()));

        let draft = ItemDraft::new("Edging", "", "Crisp lines.");
        let err = client.update_guide(7, &draft).await.unwrap_err();
        assert_eq!(err, ApiError::Validation("Category is required".to_string()));
    }

    /// Build a [`Response`] without a server. Native-only, which is where
    /// the test suite runs.
    fn response(status: u16, body: &str) -> Response {
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .expect("static response")
            .into()
    }

    #[tokio::test]
    async fn success_body_parses_as_json() {
        let res = response(
            200,
            r#"[{"id":1,"title":"Mowing","category":"Quality","content":"Stripes."}]"#,
        );
        let standards: Vec<Standard> = Client::read_json(res).await.unwrap();
        assert_eq!(standards.len(), 1);
        assert_eq!(standards[0].id, 1);
        assert_eq!(standards[0].title, "Mowing");
    }

    #[tokio::test]
    async fn malformed_success_body_is_an_api_error() {
        let err = Client::read_json::<Standard>(response(200, "not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 200, .. }));
    }

    #[tokio::test]
    async fn delete_ignores_any_success_body() {
        // The backend is free to answer 200 with a payload or a bare 204.
        let res = response(200, r#"{"deleted":true}"#);
        assert_eq!(Client::read_empty(res).await, Ok(()));

        let res = response(204, "");
        assert_eq!(Client::read_empty(res).await, Ok(()));
    }

    #[tokio::test]
    async fn rejected_responses_carry_the_server_message() {
        let err = Client::read_empty(response(500, r#"{"error":"boom"}"#))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Api {
                status: 500,
                message: "boom".to_string()
            }
        );

        let err = Client::read_json::<Standard>(response(401, ""))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Auth("Session expired".to_string()));
    }

    #[test]
    fn base_url_defaults_to_production_backend() {
        // Respect an ambient override if the test environment sets one.
        if std::env::var("LAWNHUB_API_URL").is_err() {
            assert_eq!(base_url(), DEFAULT_API_URL);
        }
    }
}
