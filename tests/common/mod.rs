//! Shared fixtures: a throwaway SQLite database with the `users` table.

use sea_orm::{ConnectionTrait, Schema};
use tempfile::TempDir;

use user_crud::config::Config;
use user_crud::infra::repositories::entities::UserEntity;
use user_crud::infra::Database;

/// Database living in a temporary directory, removed on drop.
pub struct TestDb {
    pub database: Database,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display());

    let database = Database::connect(&Config::with_database_url(url))
        .await
        .expect("open sqlite database");

    let conn = database.connection();
    let backend = conn.get_database_backend();
    let create_users = Schema::new(backend).create_table_from_entity(UserEntity);
    conn.execute(backend.build(&create_users))
        .await
        .expect("create users table");

    TestDb {
        database,
        _dir: dir,
    }
}
