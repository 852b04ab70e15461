use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};
use crate::infrastructure::config::SecurityConfig;

/// Argon2id password hasher implementation
///
/// Cost parameters come from [`SecurityConfig`]; the defaults there are
/// 19 MiB of memory, 2 iterations and 1 lane.
///
/// Hashing and verification are CPU-bound and run on tokio's blocking pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a hasher with explicit cost parameters
  pub fn with_params(
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
  ) -> Result<Self, AuthError> {
    let params = Params::new(memory_kib, iterations, parallelism, Some(32)).map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  /// Creates a hasher from the security section of the configuration
  pub fn from_config(config: &SecurityConfig) -> Result<Self, AuthError> {
    Self::with_params(
      config.argon2_memory_kib,
      config.argon2_iterations,
      config.argon2_parallelism,
    )
  }

  fn hash_blocking(argon2: &Argon2<'static>, password: &Password) -> Result<PasswordHash, AuthError> {
    // Fresh salt from the OS's cryptographically secure RNG for every hash
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| {
        AuthError::Hash(HashError::HashingFailed(format!(
          "Failed to hash password: {}",
          e
        )))
      })?;

    Ok(PasswordHash::new(hash.to_string()))
  }

  fn verify_blocking(
    argon2: &Argon2<'static>,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str()).map_err(|e| {
      AuthError::Hash(HashError::VerificationFailed(format!(
        "Invalid hash format: {}",
        e
      )))
    })?;

    // Parameters come from the stored PHC string, so older hashes with other
    // cost settings still verify. The comparison is constant-time.
    match argon2.verify_password(password.as_str().as_bytes(), &parsed_hash) {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AuthError::Hash(HashError::VerificationFailed(format!(
        "Password verification failed: {}",
        e
      )))),
    }
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();

    tokio::task::spawn_blocking(move || Self::hash_blocking(&argon2, &password))
      .await
      .map_err(|e| AuthError::Hash(HashError::HashingFailed(format!("Hash task failed: {}", e))))?
  }

  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();
    let hashed_password = hashed_password.clone();

    tokio::task::spawn_blocking(move || Self::verify_blocking(&argon2, &password, &hashed_password))
      .await
      .map_err(|e| {
        AuthError::Hash(HashError::VerificationFailed(format!(
          "Verify task failed: {}",
          e
        )))
      })?
  }
}
