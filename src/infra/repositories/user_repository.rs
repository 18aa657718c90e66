//! User repository: one parameterized statement per operation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::transaction::in_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity label used in conflict messages
const ENTITY: &str = "User";

/// User repository trait for dependency injection.
///
/// Writes run in their own transaction and report failures to the caller;
/// nothing is retried.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user with its caller-chosen id.
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// Find user by ID, `None` when no row matches.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Set a new login on the row matching both id and email.
    ///
    /// Returns the number of rows changed; a stale email changes none.
    async fn update_login(&self, id: i32, email: &str, login: &str) -> AppResult<u64>;

    /// Delete user by ID, returning the number of rows removed.
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository backed by a connection pool
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance over an injected pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: &User) -> AppResult<()> {
        // INSERT INTO users (id, email, login) VALUES (?, ?, ?)
        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            login: Set(user.login.clone()),
        };

        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                UserEntity::insert(active_model)
                    .exec_without_returning(txn)
                    .await
                    .map_err(|e| AppError::from_db(e, ENTITY))?;
                Ok(())
            })
        })
        .await?;

        tracing::debug!(id = user.id, "User inserted");
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        // SELECT ... FROM users WHERE id = ?
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update_login(&self, id: i32, email: &str, login: &str) -> AppResult<u64> {
        // UPDATE users SET login = ? WHERE id = ? AND email = ?
        let email = email.to_owned();
        let login = login.to_owned();

        let rows = in_transaction(&self.db, |txn| {
            Box::pin(async move {
                let result = UserEntity::update_many()
                    .col_expr(user::Column::Login, Expr::value(login))
                    .filter(user::Column::Id.eq(id))
                    .filter(user::Column::Email.eq(email))
                    .exec(txn)
                    .await
                    .map_err(|e| AppError::from_db(e, ENTITY))?;
                Ok(result.rows_affected)
            })
        })
        .await?;

        tracing::debug!(id, rows, "User login update applied");
        Ok(rows)
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        // DELETE FROM users WHERE id = ?
        let rows = in_transaction(&self.db, |txn| {
            Box::pin(async move {
                let result = UserEntity::delete_by_id(id)
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;
                Ok(result.rows_affected)
            })
        })
        .await?;

        tracing::debug!(id, rows, "User delete applied");
        Ok(rows)
    }
}
