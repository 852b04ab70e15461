use std::sync::Arc;
use uuid::Uuid;

use super::entities::{PublicUser, User};
use super::errors::AuthError;
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::Password;

/// Credential service: user registration and login validation
pub struct CredentialService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl CredentialService {
  /// Creates a new instance of CredentialService
  pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      user_repo,
      password_hasher,
    }
  }

  /// Registers a new user
  ///
  /// The password is hashed before anything is written, so a hashing failure
  /// leaves the store untouched. The returned record still carries the hash;
  /// callers strip it before it leaves the service.
  ///
  /// # Errors
  /// Returns `AuthError::Hash` if hashing fails and
  /// `AuthError::Repository(RepositoryError::DuplicateKey)` if the email is taken.
  pub async fn create_user(
    &self,
    name: String,
    email: String,
    password: Password,
  ) -> Result<User, AuthError> {
    let password_hash = self.password_hasher.hash(&password).await?;

    let user = User::new(name, email, password_hash);
    let created = self.user_repo.create(user).await?;

    tracing::info!("Created user {}", created.id);

    Ok(created)
  }

  /// Validates a login attempt
  ///
  /// Unknown email and wrong password produce the same
  /// `AuthError::InvalidCredentials`. Errors raised by the hasher while
  /// verifying are passed through untouched.
  pub async fn validate_user(
    &self,
    email: &str,
    password: Password,
  ) -> Result<PublicUser, AuthError> {
    let Some(user) = self.user_repo.find_by_email(email).await? else {
      tracing::debug!("Credential check rejected: no matching account");
      return Err(AuthError::InvalidCredentials);
    };

    let is_valid = self
      .password_hasher
      .verify(&password, &user.password_hash)
      .await?;

    if !is_valid {
      tracing::debug!("Credential check rejected for user {}", user.id);
      return Err(AuthError::InvalidCredentials);
    }

    Ok(user.into_public())
  }

  /// Looks up a user by id
  pub async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    self.user_repo.find_by_id(id).await
  }
}
