use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError,
    models::{password::HashedPassword, user::User},
    repositories::user_repository::UserRepository,
};
use entity::users;

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn into_domain(model: users::Model) -> User {
    User::new(
        model.id,
        model.name,
        model.email,
        model.avatar,
        model.created_at,
    )
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(into_domain))
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        avatar: &str,
        password_hash: HashedPassword,
    ) -> Result<User, RepositoryError> {
        let id = Uuid::new_v4();
        let created_at = chrono::Utc::now();
        let user_model = users::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            avatar: Set(avatar.to_string()),
            password_hash: Set(password_hash.as_str().to_string()),
            created_at: Set(created_at),
        };

        users::Entity::insert(user_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::Conflict,
                _ => RepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(User::new(
            id,
            name.to_string(),
            email.to_string(),
            avatar.to_string(),
            created_at,
        ))
    }
}
