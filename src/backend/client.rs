//! HTTP client for communicating with the onboarding backend
//!
//! The backend accepts a single JSON document per submission; only the
//! 2xx/non-2xx distinction of the response is consulted.

use crate::config::AppConfig;
use crate::state::OnboardingSubmission;
use async_trait::async_trait;
use thiserror::Error;

use super::traits::OnboardingApi;

/// Error surfaced when a submission does not go through
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The backend answered with a non-2xx status
    #[error("Failed to submit the form. Please try again later.")]
    Rejected { status: reqwest::StatusCode },
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

/// Client for communicating with the onboarding backend
pub struct BackendClient {
    /// The HTTP client
    http: reqwest::Client,
    /// The endpoint receiving submissions
    endpoint_url: String,
}

impl BackendClient {
    /// Create a new backend client for the configured endpoint
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url: config.endpoint_url.clone(),
        }
    }
}

#[async_trait]
impl OnboardingApi for BackendClient {
    async fn submit_onboarding(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<(), SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint_url, "submitting onboarding form");

        let response = self
            .http
            .post(&self.endpoint_url)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "backend rejected the submission");
            return Err(SubmissionError::Rejected { status });
        }

        Ok(())
    }
}
