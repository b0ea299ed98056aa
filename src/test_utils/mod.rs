//! In-memory waitlist store and app-state helper for HTTP-level tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

#[derive(Debug, Clone)]
pub struct StoredSignup {
    pub name: String,
    pub email: String,
    pub kind: String,
}

/// `WaitlistRepo` backed by a `Vec`, with a switchable outage mode that makes
/// every store call fail with the given reason.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    rows: Mutex<Vec<StoredSignup>>,
    outage: Mutex<Option<String>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulate_outage(&self, reason: &str) {
        *self.outage.lock().unwrap() = Some(reason.to_string());
    }

    pub fn rows(&self) -> Vec<StoredSignup> {
        self.rows.lock().unwrap().clone()
    }

    fn check_outage(&self) -> AppResult<()> {
        match self.outage.lock().unwrap().as_ref() {
            Some(reason) => Err(AppError::Database(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert_signup(&self, name: &str, email: &str, kind: &str) -> AppResult<()> {
        self.check_outage()?;
        self.rows.lock().unwrap().push(StoredSignup {
            name: name.to_string(),
            email: email.to_string(),
            kind: kind.to_string(),
        });
        Ok(())
    }

    async fn count_signups(&self) -> AppResult<i64> {
        self.check_outage()?;
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
    }
}

pub fn test_app_state(repo: Arc<InMemoryWaitlistRepo>) -> AppState {
    let waitlist_use_cases = WaitlistUseCases::new(repo as Arc<dyn WaitlistRepo>);

    AppState {
        config: Arc::new(test_config()),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    }
}
