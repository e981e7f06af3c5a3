use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{password::HashedPassword, user::User},
};

#[async_trait]
pub trait UserRepository {
    /// Existence check by the unique email key
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Persist a new account. Storage enforces the unique email index;
    /// a violation comes back as `RepositoryError::Conflict`.
    async fn insert(
        &self,
        name: &str,
        email: &str,
        avatar: &str,
        password_hash: HashedPassword,
    ) -> Result<User, RepositoryError>;
}
