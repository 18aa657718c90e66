//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! Validation is enforced here, once, before any write reaches the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{validate_user, User, UserForm};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and insert a new user
    async fn create_user(&self, form: UserForm) -> AppResult<User>;

    /// Get user by ID, `AppError::NotFound` when absent
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Validate and change the login of the user matching id and email.
    ///
    /// Returns `false` when no stored row matched.
    async fn update_user(&self, form: UserForm) -> AppResult<bool>;

    /// Delete user by ID; deleting a missing user succeeds
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, form: UserForm) -> AppResult<User> {
        let user = validate_user(form)?;
        self.repo.insert(&user).await?;
        tracing::info!(id = user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, form: UserForm) -> AppResult<bool> {
        let user = validate_user(form)?;
        let rows = self
            .repo
            .update_login(user.id, &user.email, &user.login)
            .await?;

        if rows == 0 {
            tracing::debug!(id = user.id, "No user matched id and email, login unchanged");
        }
        Ok(rows > 0)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        let rows = self.repo.delete(id).await?;
        tracing::info!(id, rows, "User delete requested");
        Ok(())
    }
}
