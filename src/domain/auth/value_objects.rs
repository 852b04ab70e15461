use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValidationError;

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// Plaintext password supplied by a caller
///
/// Format rules live at the transport boundary; the only rule here is that a
/// password is present. The buffer is wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  /// Creates a new Password, rejecting an empty string
  pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValidationError::MissingField {
        field: "password".to_string(),
      });
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// Implement Display without exposing the password
impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (Self-Describing Hash String)
// ============================================================================

/// Output of the password hasher
///
/// The string embeds algorithm, cost parameters and salt, so it is all a
/// hasher needs for later verification. Parsing is the hasher's job; a
/// malformed value is reported when it is verified.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Wraps a hash string produced by a hasher or loaded from storage
  pub fn new(hash: impl Into<String>) -> Self {
    Self(hash.into())
  }

  /// Returns the hash as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("PasswordHash(***)")
  }
}
