use std::future::Future;

use reqwest::Url;
use serde::Deserialize;

use super::config::ClientConfig;
use super::draft::Draft;

/// Shown when no response reached the form at all.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed. Please try again.";

/// Errors from a signup request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Server { status: u16, message: Option<String> },

    /// No response was received (connection refused, timeout, bad URL).
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// The text shown to the user: the server's own message when it sent one,
    /// then a status-based message, then a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Server { status, .. } => {
                format!("Request failed with status code {status}")
            }
            ApiError::Transport(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Body of a successful signup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Sends a draft to the signup endpoint for its kind.
pub trait SignupApi {
    fn signup(&self, draft: &Draft) -> impl Future<Output = Result<SignupReceipt, ApiError>> + Send;
}

/// [`SignupApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSignupApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSignupApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: super::config::as_base(config.api_base_url.clone()),
        })
    }
}

impl SignupApi for HttpSignupApi {
    async fn signup(&self, draft: &Draft) -> Result<SignupReceipt, ApiError> {
        let url = self
            .base_url
            .join(draft.kind().signup_path())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);

            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        // The record was created; an unreadable body doesn't undo that.
        Ok(response.json::<SignupReceipt>().await.unwrap_or_default())
    }
}
