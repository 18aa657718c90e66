//! Structural validation of user payloads.
//!
//! Every write path goes through [`validate_user`]; nothing reaches the
//! persistence layer without passing it.

use validator::{Validate, ValidationErrors};

use super::user::{User, UserForm};
use crate::errors::{AppError, AppResult};

/// Returns `true` when the email or login is absent, empty or too long.
pub fn is_invalid(form: &UserForm) -> bool {
    form.validate().is_err()
}

/// Check a posted form and turn it into a [`User`].
///
/// Besides the field rules, a write needs its key, so a missing `id`
/// is rejected here too.
pub fn validate_user(form: UserForm) -> AppResult<User> {
    form.validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

    match form {
        UserForm {
            id: Some(id),
            email: Some(email),
            login: Some(login),
        } => Ok(User { id, email, login }),
        UserForm { id: None, .. } => Err(AppError::validation("Id is required")),
        // validate() already rejected absent email/login
        _ => Err(AppError::internal("validated form is missing a field")),
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
