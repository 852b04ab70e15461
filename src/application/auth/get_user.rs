use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::CredentialService;

/// Response containing public user information
#[derive(Debug, Clone)]
pub struct GetUserResponse {
  /// Unique identifier of the user
  pub user_id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
}

/// Use case for fetching a user by id
pub struct GetUserUseCase {
  credential_service: Arc<CredentialService>,
}

impl GetUserUseCase {
  /// Creates a new instance of GetUserUseCase
  pub fn new(credential_service: Arc<CredentialService>) -> Self {
    Self { credential_service }
  }

  /// Executes the get user use case
  ///
  /// # Errors
  /// Returns `AuthError::UserNotFound` if no user has the given id
  pub async fn execute(&self, user_id: Uuid) -> Result<GetUserResponse, AuthError> {
    let user = self
      .credential_service
      .find_user_by_id(user_id)
      .await?
      .ok_or(AuthError::UserNotFound)?
      .into_public();

    Ok(GetUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
    })
  }
}
