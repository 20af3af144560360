use serde::{Deserialize, Serialize};

use crate::domain::{error::RegistrationError, models::account::RegisteredUser};

pub const MSG_REGISTERED: &str = "User registered successfully";

/// Which terminal failure produced an outcome. Not serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Duplicate,
    StoreUnavailable,
    Internal,
}

/// Structured result of `register`; every path produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RegisteredUser>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl RegistrationOutcome {
    pub fn registered(user: RegisteredUser) -> Self {
        Self {
            success: true,
            message: MSG_REGISTERED.to_string(),
            errors: None,
            user: Some(user),
            failure: None,
        }
    }

    pub fn failed(error: RegistrationError) -> Self {
        let message = error.to_string();
        let (errors, kind) = match error {
            RegistrationError::Validation(errors) => (errors, FailureKind::Validation),
            RegistrationError::Duplicate => (vec![message.clone()], FailureKind::Duplicate),
            RegistrationError::StoreUnavailable => {
                (vec![message.clone()], FailureKind::StoreUnavailable)
            }
            RegistrationError::Internal => (vec![message.clone()], FailureKind::Internal),
        };

        Self {
            success: false,
            message,
            errors: Some(errors),
            user: None,
            failure: Some(kind),
        }
    }
}

impl From<Result<RegisteredUser, RegistrationError>> for RegistrationOutcome {
    fn from(result: Result<RegisteredUser, RegistrationError>) -> Self {
        match result {
            Ok(user) => Self::registered(user),
            Err(error) => Self::failed(error),
        }
    }
}
