use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::CredentialService;
use crate::domain::auth::value_objects::Password;

/// Command for validating a user's credentials
#[derive(Clone)]
pub struct ValidateUserCommand {
  /// User's email address
  pub email: String,
  /// User's password (plain text)
  pub password: String,
}

/// Response after successful credential validation
#[derive(Debug, Clone)]
pub struct ValidateUserResponse {
  /// Unique identifier of the user
  pub user_id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
}

/// Use case for validating login credentials
pub struct ValidateUserUseCase {
  credential_service: Arc<CredentialService>,
}

impl ValidateUserUseCase {
  /// Creates a new instance of ValidateUserUseCase
  pub fn new(credential_service: Arc<CredentialService>) -> Self {
    Self { credential_service }
  }

  /// Executes the credential validation use case
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email, a wrong
  /// password, or an empty password. Hashing and repository failures pass
  /// through unchanged.
  pub async fn execute(
    &self,
    command: ValidateUserCommand,
  ) -> Result<ValidateUserResponse, AuthError> {
    // An empty password can never match a stored hash
    let password = Password::new(command.password).map_err(|_| AuthError::InvalidCredentials)?;

    let user = self
      .credential_service
      .validate_user(&command.email, password)
      .await?;

    Ok(ValidateUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
    })
  }
}
