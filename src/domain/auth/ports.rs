use async_trait::async_trait;
use uuid::Uuid;

use super::entities::User;
use super::errors::AuthError;
use super::value_objects::{Password, PasswordHash};

/// Repository trait for user persistence operations
///
/// Implementations must enforce email uniqueness atomically and report a
/// clash as `RepositoryError::DuplicateKey`.
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Inserts a new user and returns the persisted record
  async fn create(&self, user: User) -> Result<User, AuthError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a fresh random salt
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a hashed password
  ///
  /// `Ok(false)` means mismatch. `Err` means verification itself failed.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError>;
}
