//! # API crate — typed client for the TrainerHub REST backend
//!
//! The backend is an external HTTPS/JSON service; this crate is the only
//! place the frontend talks to it. Every call is a single round trip — no
//! retries, no timeout overrides beyond the transport default.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire models (`ProviderSummary`, `UserInfo`, `Category`, request/response envelopes) |
//! | [`error`] | Error taxonomy: `Validation` / `Transport` / `Application` |
//! | [`validate`] | Local signup validation; invalid forms never reach the network |
//!
//! ## Operations
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | GET | `/service-providers/search?searchTerm=` | [`ApiClient::search_providers`] |
//! | POST | `/auth/login` | [`ApiClient::login`] |
//! | POST | `/users/create` | [`ApiClient::create_user`] |
//! | GET | `/service-providers/categories` | [`ApiClient::categories`] |

use tracing::debug;

pub mod error;
pub mod models;
pub mod validate;

pub use error::ApiError;
use error::TransportReason;
pub use models::{Category, Envelope, LoginData, ProviderSummary, Role, SignupRequest, UserInfo};
pub use validate::{SignupForm, VALID_PROFESSIONS};

/// Thin gateway to the remote backend. Cheap to clone; the underlying
/// `reqwest::Client` shares its connection pool across clones.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Type-ahead provider search. One round trip; any non-success envelope
    /// or transport error is a failure, surfaced uniformly to the caller.
    pub async fn search_providers(&self, term: &str) -> Result<Vec<ProviderSummary>, ApiError> {
        debug!(term, "searching providers");
        let response = self
            .http
            .get(self.url("/service-providers/search"))
            .query(&[("searchTerm", term)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(TransportReason::Status(status)));
        }

        let envelope: Envelope<Vec<ProviderSummary>> = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(TransportReason::Decode(e)))?;

        if !envelope.success {
            return Err(ApiError::application(envelope.message, "Search failed"));
        }
        Ok(envelope.data.unwrap_or_default())
    }

    /// Exchange credentials for a profile and token pair.
    ///
    /// The backend answers failed logins with a JSON body too, so the
    /// envelope is decoded regardless of status and its message surfaced as
    /// an [`ApiError::Application`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let envelope: Envelope<LoginData> = match response.json().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Transport(TransportReason::Status(status)));
            }
            Err(e) => return Err(ApiError::Transport(TransportReason::Decode(e))),
        };

        match envelope.data {
            Some(data) if status.is_success() && envelope.success => Ok(data),
            _ => Err(ApiError::application(envelope.message, "Login failed")),
        }
    }

    /// Create an account. Runs [`SignupForm::into_request`] first, so an
    /// invalid form returns [`ApiError::Validation`] without any network
    /// traffic.
    pub async fn create_user(&self, form: SignupForm) -> Result<(), ApiError> {
        let request = form.into_request()?;
        let response = self
            .http
            .post(self.url("/users/create"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let envelope: Envelope<serde_json::Value> = match response.json().await {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Transport(TransportReason::Status(status)));
            }
            Err(e) => return Err(ApiError::Transport(TransportReason::Decode(e))),
        };

        if status.is_success() && envelope.success {
            Ok(())
        } else {
            Err(ApiError::application(envelope.message, "Signup failed"))
        }
    }

    /// Fetch the category grid for the home page.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .http
            .get(self.url("/service-providers/categories"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Transport(TransportReason::Status(status)));
        }

        let envelope: Envelope<Vec<Category>> = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(TransportReason::Decode(e)))?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("https://api.example.com/api/v1/");
        assert_eq!(client.base_url(), "https://api.example.com/api/v1");
        assert_eq!(
            client.url("/auth/login"),
            "https://api.example.com/api/v1/auth/login"
        );
    }

    #[tokio::test]
    async fn test_invalid_signup_never_touches_the_network() {
        // Unroutable base URL: if validation let the request through, this
        // would fail with a transport error instead of a validation one.
        let client = ApiClient::new("http://127.0.0.1:1");
        let form = SignupForm {
            password: "short".into(),
            confirm_password: "short".into(),
            ..Default::default()
        };

        let err = client.create_user(form).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
