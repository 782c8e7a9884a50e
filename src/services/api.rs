//! HTTP client for the POUPAR+ backend
//!
//! Every remote interaction the front-end performs is an [`ApiRequest`]. The
//! TUI hands requests to a [`Dispatch`] implementation, which runs them off the
//! UI thread and reports an [`ApiCompletion`] tagged with the request id.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::Settings;
use crate::error::{PouparError, PouparResult};
use crate::models::UserProfile;

/// Cache key (and path) of the signed-in user's profile
pub const USER_QUERY_KEY: &str = "/api/user";
pub const TUTORIAL_PROGRESS_PATH: &str = "/api/tutorial-progress";
pub const LUMIN_PATH: &str = "/api/lumin";
pub const ACCEPT_TERMS_PATH: &str = "/api/accept-terms";

/// Body of `POST /api/tutorial-progress`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialProgress {
    pub step: usize,
    pub coins_earned: u32,
    pub experience_earned: u32,
}

/// Structured suggestions attached to an assistant answer
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(default)]
    pub monthly_contribution: Option<f64>,
    /// Months until the goal should be reached
    #[serde(default)]
    pub timeframe: Option<u32>,
    #[serde(default)]
    pub savings_goal: Option<f64>,
}

/// Answer from the Lumin assistant
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LuminResponse {
    pub response: String,
    #[serde(default)]
    pub recommendations: Option<Recommendations>,
}

#[derive(Serialize)]
struct LuminRequest<'a> {
    message: &'a str,
}

/// A remote operation
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Ask the assistant for goal recommendations
    Recommendation { prompt: String },
    /// Record a completed tutorial step and its reward
    TutorialProgress(TutorialProgress),
    /// (Re)load the signed-in user's profile
    FetchUser,
    /// Record acceptance of the terms and conditions
    AcceptTerms,
}

impl ApiRequest {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Recommendation { .. } => "recommendation",
            Self::TutorialProgress(_) => "tutorial-progress",
            Self::FetchUser => "fetch-user",
            Self::AcceptTerms => "accept-terms",
        }
    }
}

/// Successful result of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Recommendation(LuminResponse),
    ProgressRecorded,
    User(UserProfile),
    TermsAccepted,
}

/// A finished request, delivered back to the UI thread
#[derive(Debug)]
pub struct ApiCompletion {
    pub id: Uuid,
    pub result: PouparResult<ApiResponse>,
}

/// Runs requests without blocking the caller
pub trait Dispatch {
    /// Start `request` and return the id its completion will carry
    fn dispatch(&self, request: ApiRequest) -> Uuid;
}

/// Blocking HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> PouparResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| PouparError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.api_root().to_string(),
            token: settings.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a backend path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform a request synchronously
    pub fn execute(&self, request: &ApiRequest) -> PouparResult<ApiResponse> {
        debug!(request = request.name(), "sending request");

        match request {
            ApiRequest::Recommendation { prompt } => {
                let answer: LuminResponse =
                    self.post_json(LUMIN_PATH, &LuminRequest { message: prompt })?;
                Ok(ApiResponse::Recommendation(answer))
            }
            ApiRequest::TutorialProgress(progress) => {
                self.post(TUTORIAL_PROGRESS_PATH, progress)?;
                info!(step = progress.step, coins = progress.coins_earned, "tutorial progress recorded");
                Ok(ApiResponse::ProgressRecorded)
            }
            ApiRequest::FetchUser => {
                let user: UserProfile = self.get_json(USER_QUERY_KEY)?;
                Ok(ApiResponse::User(user))
            }
            ApiRequest::AcceptTerms => {
                self.post(ACCEPT_TERMS_PATH, &serde_json::json!({ "accepted": true }))?;
                Ok(ApiResponse::TermsAccepted)
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> PouparResult<T> {
        let response = self.send(self.client.get(self.url(path)))?;
        response.json().map_err(|e| {
            error!(path, "failed to parse response: {}", e);
            PouparError::Json(e.to_string())
        })
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> PouparResult<T> {
        let response = self.send(self.client.post(self.url(path)).json(body))?;
        response.json().map_err(|e| {
            error!(path, "failed to parse response: {}", e);
            PouparError::Json(e.to_string())
        })
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> PouparResult<()> {
        self.send(self.client.post(self.url(path)).json(body))?;
        Ok(())
    }

    fn send(&self, builder: RequestBuilder) -> PouparResult<Response> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().map_err(|e| {
            error!("request failed: {}", e);
            PouparError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        error!(status = status.as_u16(), "backend error response: {}", body);
        Err(PouparError::api(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_body_field_names() {
        let body = TutorialProgress {
            step: 1,
            coins_earned: 100,
            experience_earned: 200,
        };
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"step": 1, "coinsEarned": 100, "experienceEarned": 200})
        );
    }

    #[test]
    fn test_lumin_response_with_recommendations() {
        let answer: LuminResponse = serde_json::from_str(
            r#"{"response":"Poupe 250€ por mês","recommendations":{"monthlyContribution":250,"timeframe":24,"savingsGoal":6000}}"#,
        )
        .unwrap();
        let rec = answer.recommendations.unwrap();
        assert_eq!(rec.monthly_contribution, Some(250.0));
        assert_eq!(rec.timeframe, Some(24));
        assert_eq!(rec.savings_goal, Some(6000.0));
    }

    #[test]
    fn test_lumin_response_without_recommendations() {
        let answer: LuminResponse = serde_json::from_str(r#"{"response":"Olá"}"#).unwrap();
        assert!(answer.recommendations.is_none());
    }

    #[test]
    fn test_client_urls() {
        let settings = Settings::default().with_api_base_url(Some("https://api.example/".into()));
        let client = ApiClient::new(&settings).unwrap();
        assert_eq!(client.base_url(), "https://api.example");
        assert_eq!(client.url(USER_QUERY_KEY), "https://api.example/api/user");
    }

    #[test]
    fn test_unreachable_backend_is_remote_error() {
        let mut settings = Settings::default().with_api_base_url(Some("http://127.0.0.1:9".into()));
        settings.request_timeout_secs = 1;
        let client = ApiClient::new(&settings).unwrap();

        let err = client.execute(&ApiRequest::FetchUser).unwrap_err();
        assert!(err.is_remote());
    }
}
