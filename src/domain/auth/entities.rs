use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::value_objects::PasswordHash;

/// User entity as held by the store
///
/// Deliberately not `Serialize`: anything leaving the service goes through
/// [`PublicUser`], which has no password hash field.
#[derive(Clone)]
pub struct User {
  /// Unique identifier, generated at creation
  pub id: Uuid,
  /// Display name
  pub name: String,
  /// Email address (unique)
  pub email: String,
  /// Salted one-way hash of the password
  pub password_hash: PasswordHash,
}

impl User {
  /// Creates a new user with a freshly generated id
  pub fn new(name: String, email: String, password_hash: PasswordHash) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      password_hash,
    }
  }

  /// Creates a user from stored fields
  pub fn from_db(id: Uuid, name: String, email: String, password_hash: String) -> Self {
    Self {
      id,
      name,
      email,
      password_hash: PasswordHash::new(password_hash),
    }
  }

  /// Drops the password hash, keeping only what may cross the trust boundary
  pub fn into_public(self) -> PublicUser {
    PublicUser {
      id: self.id,
      name: self.name,
      email: self.email,
    }
  }
}

impl fmt::Debug for User {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("User")
      .field("id", &self.id)
      .field("name", &self.name)
      .field("email", &self.email)
      .finish_non_exhaustive()
  }
}

/// Sanitized user projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
  pub id: Uuid,
  pub name: String,
  pub email: String,
}

impl From<User> for PublicUser {
  fn from(user: User) -> Self {
    user.into_public()
  }
}
