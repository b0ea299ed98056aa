use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::{NewSignup, SignupKind},
};

#[derive(Deserialize)]
struct SignupRequest {
    name: String,
    email: String,
    #[serde(rename = "type")]
    kind: SignupKind,
}

#[derive(Serialize)]
struct SignupResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SignupResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            success: false,
            error: Some(reason),
        }
    }
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist).get(waitlist_count))
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<SignupResponse>> {
    let signup = NewSignup {
        name: &payload.name,
        email: &payload.email,
        kind: payload.kind,
    };

    match app_state.waitlist_use_cases.record_signup(signup).await {
        Ok(()) => Ok(Json(SignupResponse::ok())),
        // A failed insert is reported in the body, not as an HTTP error.
        Err(AppError::Database(reason)) => {
            tracing::error!(error = %reason, "waitlist insert failed");
            Ok(Json(SignupResponse::failed(reason)))
        }
        Err(other) => Err(other),
    }
}

// Fail-soft: a count the page cannot fetch renders as zero, never as an error.
async fn waitlist_count(State(app_state): State<AppState>) -> Json<CountResponse> {
    let count = match app_state.waitlist_use_cases.signup_count().await {
        Ok(n) => n,
        Err(err) => {
            tracing::error!(error = %err, "waitlist count failed, reporting zero");
            0
        }
    };
    Json(CountResponse { count })
}
