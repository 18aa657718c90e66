//! Per-operation transactions.
//!
//! Each write checks a connection out of the pool, runs inside its own
//! transaction and hands the connection back when the transaction is
//! finished. An unfinished `DatabaseTransaction` rolls back on drop, so the
//! connection is released on every path, panics included.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, IsolationLevel,
    TransactionTrait,
};

use crate::errors::AppResult;

/// Boxed future borrowing the transaction for its lifetime.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Execute a closure within a transaction.
///
/// The transaction is committed on success or rolled back on error. A failed
/// rollback is logged; the caller still receives the original error.
pub async fn in_transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
    T: Send,
{
    let txn = db
        .begin_with_config(isolation_for(db.get_database_backend()), None)
        .await?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await?;
            Ok(result)
        }
        Err(e) => {
            tracing::warn!("Rolling back transaction: {}", e);
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Isolation requested for writes.
///
/// SQLite has no per-transaction isolation setting, so it keeps its default.
fn isolation_for(backend: DatabaseBackend) -> Option<IsolationLevel> {
    match backend {
        DatabaseBackend::Sqlite => None,
        _ => Some(IsolationLevel::ReadCommitted),
    }
}
