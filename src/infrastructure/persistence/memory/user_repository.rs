//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
};

#[derive(Default)]
struct Store {
  users: HashMap<Uuid, User>,
  /// Index for email -> user ID lookup
  email_index: HashMap<String, Uuid>,
}

/// In-memory implementation of UserRepository
///
/// Both maps sit behind one lock so the uniqueness check and the insert
/// happen atomically.
#[derive(Default)]
pub struct InMemoryUserRepository {
  store: RwLock<Store>,
}

impl InMemoryUserRepository {
  /// Create a new empty repository
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of stored users
  pub async fn len(&self) -> usize {
    self.store.read().await.users.len()
  }

  /// Returns true when no users are stored
  pub async fn is_empty(&self) -> bool {
    self.store.read().await.users.is_empty()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let mut store = self.store.write().await;

    if store.email_index.contains_key(&user.email) {
      return Err(RepositoryError::DuplicateKey("users_email_key".to_string()).into());
    }
    if store.users.contains_key(&user.id) {
      return Err(RepositoryError::DuplicateKey("users_pkey".to_string()).into());
    }

    store.email_index.insert(user.email.clone(), user.id);
    store.users.insert(user.id, user.clone());

    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    Ok(self.store.read().await.users.get(&id).cloned())
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
    let store = self.store.read().await;

    Ok(
      store
        .email_index
        .get(email)
        .and_then(|id| store.users.get(id))
        .cloned(),
    )
  }
}
