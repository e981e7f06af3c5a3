use crate::domain::{
    error::{DomainError, RepositoryError},
    models::user::{Registration, User},
    repositories::user_repository::UserRepository,
    services::{
        avatar::{AvatarOptions, gravatar_url},
        password_service::PasswordHasher,
    },
};

pub struct RegisterUserUsecase<R: UserRepository, P: PasswordHasher> {
    user_repository: R,
    password_hasher: P,
    avatar_options: AvatarOptions,
}

impl<R: UserRepository, P: PasswordHasher> RegisterUserUsecase<R, P> {
    pub fn new(user_repository: R, password_hasher: P) -> Self {
        Self {
            user_repository,
            password_hasher,
            avatar_options: AvatarOptions::default(),
        }
    }

    /// Run the registration sequence: validate, check uniqueness, derive
    /// avatar, hash password, persist. Each failure is terminal for the
    /// request; nothing is persisted on any error path before the insert.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        let registration = Registration::new(name, email, password)?;

        // Best-effort existence check; the unique index on email is the
        // real guard against concurrent duplicates.
        if self
            .user_repository
            .find_by_email(registration.email())
            .await?
            .is_some()
        {
            return Err(DomainError::EmailTaken);
        }

        let avatar = gravatar_url(registration.email(), &self.avatar_options);

        let password_hash = self.password_hasher.hash(registration.password())?;

        let user = self
            .user_repository
            .insert(
                registration.name(),
                registration.email(),
                &avatar,
                password_hash,
            )
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict => DomainError::EmailTaken,
                other => DomainError::Repository(other),
            })?;

        Ok(user)
    }
}
