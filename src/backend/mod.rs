//! Backend client module for HTTP communication

mod client;
mod traits;

pub use client::{BackendClient, SubmissionError};
pub use traits::OnboardingApi;

#[cfg(test)]
pub use traits::MockOnboardingApi;
