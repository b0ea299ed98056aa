use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::app_error::{AppError, AppResult};

/// Which side of the marketplace a signup comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupKind {
    Investor,
    #[serde(rename = "SME")]
    Sme,
}

impl SignupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupKind::Investor => "Investor",
            SignupKind::Sme => "SME",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NewSignup<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub kind: SignupKind,
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert_signup(&self, name: &str, email: &str, kind: &str) -> AppResult<()>;
    async fn count_signups(&self) -> AppResult<i64>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Writes one waitlist row. A single INSERT, so there is no partial state
    /// to roll back on failure and no retry.
    #[instrument(skip(self))]
    pub async fn record_signup(&self, signup: NewSignup<'_>) -> AppResult<()> {
        if signup.name.trim().is_empty() {
            return Err(AppError::InvalidInput("name must not be empty".into()));
        }
        if signup.email.trim().is_empty() {
            return Err(AppError::InvalidInput("email must not be empty".into()));
        }
        self.repo
            .insert_signup(signup.name, signup.email, signup.kind.as_str())
            .await
    }

    #[instrument(skip(self))]
    pub async fn signup_count(&self) -> AppResult<i64> {
        self.repo.count_signups().await
    }
}
