//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{MAX_EMAIL_LENGTH, MAX_LOGIN_LENGTH};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Caller-chosen identifier (primary key)
    #[schema(example = 1)]
    pub id: i32,
    /// User email address, immutable after creation
    #[schema(example = "a@b.com", max_length = 25)]
    pub email: String,
    /// User login
    #[schema(example = "alice", max_length = 20)]
    pub login: String,
}

impl User {
    pub fn new(id: i32, email: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            login: login.into(),
        }
    }
}

/// User payload as posted by a form.
///
/// Every field may be absent; the validator decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserForm {
    /// User identifier
    #[schema(example = 1)]
    pub id: Option<i32>,
    /// User email address
    #[validate(
        required(message = "Email is required"),
        length(min = 1, max = MAX_EMAIL_LENGTH, message = "Email must be between 1 and 25 characters")
    )]
    #[schema(example = "a@b.com")]
    pub email: Option<String>,
    /// User login
    #[validate(
        required(message = "Login is required"),
        length(min = 1, max = MAX_LOGIN_LENGTH, message = "Login must be between 1 and 20 characters")
    )]
    #[schema(example = "alice")]
    pub login: Option<String>,
}

impl UserForm {
    pub fn new(id: i32, email: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            email: Some(email.into()),
            login: Some(login.into()),
        }
    }
}
