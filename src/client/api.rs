//! Typed client for the subscription backend.
//!
//! Every call goes through [`ApiClient::request`], which attaches the
//! session token, and [`ApiClient::execute`], which maps HTTP status codes
//! and unwraps the `{ status, message, data, error }` envelope.

use reqwest::{Method, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::http::HttpClient;
use super::session::SessionContext;
use crate::domain::link::{compose_filtered, encode_uri_component};
use crate::domain::{
    DashError, KnowledgeBase, PurchasePlan, ResetUuid, SelectionSet, Subscription, Ticket,
    UserInfo,
};

/// Path prefix shared by every endpoint.
const API_PREFIX: &str = "/api/v1";

/// Knowledge-base language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "zh-CN";

// ============================================================================
// Wire Types
// ============================================================================

/// Response envelope wrapped around every payload.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl<T> ApiEnvelope<T> {
    fn into_data(self) -> Result<T, DashError> {
        if let Some(data) = self.data {
            return Ok(data);
        }
        let message = match (self.error, self.message) {
            (Some(serde_json::Value::String(error)), _) => error,
            (Some(error), _) if !error.is_null() => error.to_string(),
            (_, Some(message)) if !message.is_empty() => message,
            _ => "response carried no data".to_string(),
        };
        Err(DashError::Api { message })
    }
}

#[derive(Debug, Deserialize)]
struct AuthPayload {
    auth_data: String,
}

#[derive(Debug, Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Fields submitted when creating an account.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
    pub email_code: String,
}

// ============================================================================
// API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    language: String,
    http: HttpClient,
    session: SessionContext,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, http: HttpClient, session: SessionContext) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            http,
            session,
        }
    }

    /// Sets the knowledge-base language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.json_request(method, &self.url(path));
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, token),
            None => request,
        }
    }

    /// Maps a response status to an error, dropping the session on 401.
    pub(crate) fn check_status(&self, status: StatusCode) -> Result<(), DashError> {
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Backend rejected the session token, clearing session");
            if let Err(err) = self.session.clear() {
                tracing::error!("Failed to clear session: {err}");
            }
            return Err(DashError::Unauthorized);
        }
        Err(DashError::Http {
            status: status.as_u16(),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, DashError> {
        let response = request.send().await?;
        self.check_status(response.status())?;
        let body = response.text().await?;
        parse_envelope(&body)
    }

    fn require_token(&self) -> Result<(), DashError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(DashError::NotAuthenticated)
        }
    }

    // ------------------------------------------------------------------------
    // Dashboard endpoints
    // ------------------------------------------------------------------------

    /// Fetches the current subscription.
    ///
    /// # Errors
    ///
    /// Returns `DashError::NotAuthenticated` without touching the network
    /// when no token is stored.
    pub async fn get_subscription(&self) -> Result<Subscription, DashError> {
        self.require_token()?;
        self.execute(self.request(Method::GET, "/user/getSubscribe"))
            .await
    }

    /// Fetches knowledge-base articles grouped by category.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or envelope failures.
    pub async fn fetch_knowledge(&self) -> Result<KnowledgeBase, DashError> {
        let path = format!(
            "/user/knowledge/fetch?language={}",
            encode_uri_component(&self.language)
        );
        self.execute(self.request(Method::GET, &path)).await
    }

    /// Fetches purchasable plans.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or envelope failures.
    pub async fn fetch_plans(&self) -> Result<Vec<PurchasePlan>, DashError> {
        self.execute(self.request(Method::GET, "/user/plan/fetch"))
            .await
    }

    /// Fetches the user's support tickets.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or envelope failures.
    pub async fn fetch_tickets(&self) -> Result<Vec<Ticket>, DashError> {
        self.execute(self.request(Method::GET, "/user/ticket/fetch"))
            .await
    }

    /// Fetches account information.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or envelope failures.
    pub async fn fetch_user_info(&self) -> Result<UserInfo, DashError> {
        self.execute(self.request(Method::GET, "/user/info")).await
    }

    /// Asks the backend for a new account UUID.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or envelope failures.
    pub async fn reset_uuid(&self) -> Result<ResetUuid, DashError> {
        self.execute(self.request(Method::POST, "/user/uuid/reset"))
            .await
    }

    // ------------------------------------------------------------------------
    // Passport endpoints
    // ------------------------------------------------------------------------

    /// Sends an email verification code.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status or envelope failures.
    pub async fn send_email_verify(&self, email: &str) -> Result<(), DashError> {
        let request = self
            .request(Method::POST, "/passport/comm/sendEmailVerify")
            .json(&EmailBody { email });
        let _: serde_json::Value = self.execute(request).await?;
        tracing::info!("Verification code requested for {email}");
        Ok(())
    }

    /// Creates an account and stores the returned token in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session cannot be saved.
    pub async fn register(&self, registration: &Registration) -> Result<(), DashError> {
        let request = self
            .request(Method::POST, "/passport/auth/register")
            .json(registration);
        let payload: AuthPayload = self.execute(request).await?;
        self.session.store(payload.auth_data)
    }

    /// Logs in and stores the returned token in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session cannot be saved.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), DashError> {
        let request = self
            .request(Method::POST, "/passport/auth/login")
            .json(&LoginBody { email, password });
        let payload: AuthPayload = self.execute(request).await?;
        self.session.store(payload.auth_data)
    }

    // ------------------------------------------------------------------------
    // Subscription content
    // ------------------------------------------------------------------------

    /// Downloads the subscription body with the selection filter applied.
    ///
    /// # Errors
    ///
    /// Returns `DashError::NotFound` when the account has no subscribe URL,
    /// otherwise any transport or status error.
    pub async fn fetch_subscription_content(
        &self,
        selection: &SelectionSet,
    ) -> Result<String, DashError> {
        let subscription = self.get_subscription().await?;
        if subscription.subscribe_url.is_empty() {
            return Err(DashError::not_found("subscription", "subscribe_url"));
        }
        let target = compose_filtered(&subscription.subscribe_url, selection);
        tracing::debug!("Fetching subscription content ({} nodes)", selection.len());

        let response = self.http.get(&target).send().await?;
        if !response.status().is_success() {
            return Err(DashError::Http {
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, DashError> {
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| DashError::parse(e.to_string()))?;
    envelope.into_data()
}
