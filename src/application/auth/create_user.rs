use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::{AuthError, ValidationError};
use crate::domain::auth::services::CredentialService;
use crate::domain::auth::value_objects::Password;

/// Command for registering a new user
#[derive(Clone)]
pub struct CreateUserCommand {
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
}

/// Response after successful user registration
#[derive(Debug, Clone)]
pub struct CreateUserResponse {
  /// Unique identifier of the newly created user
  pub user_id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
}

/// Use case for registering a new user
pub struct CreateUserUseCase {
  credential_service: Arc<CredentialService>,
}

impl CreateUserUseCase {
  /// Creates a new instance of CreateUserUseCase
  pub fn new(credential_service: Arc<CredentialService>) -> Self {
    Self { credential_service }
  }

  /// Executes the user registration use case
  ///
  /// The stored record comes back from the service with its password hash;
  /// only id, name and email are copied into the response.
  ///
  /// # Errors
  /// Returns `AuthError::Validation` for an empty name or empty password, and
  /// passes through any hashing or repository failure.
  pub async fn execute(&self, command: CreateUserCommand) -> Result<CreateUserResponse, AuthError> {
    let CreateUserCommand {
      name,
      email,
      password,
    } = command;

    if name.is_empty() {
      return Err(
        ValidationError::MissingField {
          field: "name".to_string(),
        }
        .into(),
      );
    }

    let password = Password::new(password)?;

    let user = self
      .credential_service
      .create_user(name, email, password)
      .await?
      .into_public();

    Ok(CreateUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::RepositoryError;
  use crate::domain::auth::ports::UserRepository;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::Argon2PasswordHasher;

  fn use_case() -> (CreateUserUseCase, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::with_params(8, 1, 1).unwrap());
    let service = Arc::new(CredentialService::new(repo.clone(), hasher));
    (CreateUserUseCase::new(service), repo)
  }

  fn command(name: &str, email: &str, password: &str) -> CreateUserCommand {
    CreateUserCommand {
      name: name.to_string(),
      email: email.to_string(),
      password: password.to_string(),
    }
  }

  #[tokio::test]
  async fn test_create_user_returns_identity_fields() {
    let (use_case, repo) = use_case();

    let response = use_case
      .execute(command("Ann", "ann@example.com", "s3cret"))
      .await
      .unwrap();

    assert_eq!(response.name, "Ann");
    assert_eq!(response.email, "ann@example.com");

    let stored = repo.find_by_id(response.user_id).await.unwrap().unwrap();
    assert!(stored.password_hash.as_str().starts_with("$argon2id$"));
  }

  #[tokio::test]
  async fn test_empty_name_rejected_before_persisting() {
    let (use_case, repo) = use_case();

    let err = use_case
      .execute(command("", "ann@example.com", "s3cret"))
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      AuthError::Validation(ValidationError::MissingField { .. })
    ));
    assert!(repo.is_empty().await);
  }

  #[tokio::test]
  async fn test_whitespace_name_is_kept_verbatim() {
    let (use_case, repo) = use_case();

    let response = use_case
      .execute(command("   ", "a@example.com", "s3cret"))
      .await
      .unwrap();

    assert_eq!(response.name, "   ");
    assert_eq!(repo.len().await, 1);
  }

  #[tokio::test]
  async fn test_empty_password_rejected() {
    let (use_case, repo) = use_case();

    let err = use_case
      .execute(command("Ann", "ann@example.com", ""))
      .await
      .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert!(repo.is_empty().await);
  }

  #[tokio::test]
  async fn test_duplicate_email_surfaces_repository_error() {
    let (use_case, _repo) = use_case();

    use_case
      .execute(command("Ann", "ann@example.com", "s3cret"))
      .await
      .unwrap();
    let err = use_case
      .execute(command("Ann Again", "ann@example.com", "s3cret"))
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      AuthError::Repository(RepositoryError::DuplicateKey(_))
    ));
  }
}
