//! Trait abstraction for the backend client to enable mocking in tests

use crate::state::OnboardingSubmission;
use async_trait::async_trait;

use super::client::SubmissionError;

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnboardingApi: Send + Sync {
    /// Submit the onboarding form to the backend
    async fn submit_onboarding(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<(), SubmissionError>;
}
