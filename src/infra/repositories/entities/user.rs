//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::User;

/// Row of `users(id INTEGER PRIMARY KEY, email VARCHAR, login VARCHAR)`.
///
/// Ids are chosen by the caller, never generated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub email: String,
    pub login: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            login: model.login,
        }
    }
}
