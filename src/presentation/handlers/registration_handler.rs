use std::sync::Arc;

use crate::{
    domain::{
        error::RegistrationError,
        models::{
            account::RegistrationRequest,
            outcome::{FailureKind, RegistrationOutcome},
        },
        repositories::account_repository::AccountRepository,
        services::{password_service::PasswordHasher, registration_logger::RegistrationLogger},
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

/// Fixed text: serde's rejection detail can echo submitted values
pub const MSG_MALFORMED_REQUEST: &str =
    "Request body must be JSON with string fields username, email, and password";

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_registration_router<
    R: AccountRepository + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
    L: RegistrationLogger + Send + Sync + 'static,
>(
    register_service: RegisterUserUsecase<R, P, L>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<R, P, L>))
        .with_state(state)
}

pub struct AppState<R: AccountRepository, P: PasswordHasher, L: RegistrationLogger> {
    pub register_service: Arc<RegisterUserUsecase<R, P, L>>,
}

// derive(Clone) would require the type parameters to be Clone
impl<R: AccountRepository, P: PasswordHasher, L: RegistrationLogger> Clone for AppState<R, P, L> {
    fn clone(&self) -> Self {
        Self {
            register_service: self.register_service.clone(),
        }
    }
}

fn status_for(outcome: &RegistrationOutcome) -> StatusCode {
    match outcome.failure {
        None => StatusCode::CREATED,
        Some(FailureKind::Validation) => StatusCode::BAD_REQUEST,
        Some(FailureKind::Duplicate) => StatusCode::CONFLICT,
        Some(FailureKind::StoreUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
        Some(FailureKind::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// handler function for register
async fn register<
    R: AccountRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
    L: RegistrationLogger + Send + Sync,
>(
    State(state): State<AppState<R, P, L>>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(status = %rejection.status(), "Rejected registration body");
            let outcome = RegistrationOutcome::failed(RegistrationError::Validation(vec![
                MSG_MALFORMED_REQUEST.to_string(),
            ]));
            return (status_for(&outcome), Json(outcome)).into_response();
        }
    };

    let outcome = state
        .register_service
        .register(payload.username, payload.email, payload.password)
        .await;

    (status_for(&outcome), Json(outcome)).into_response()
}
