use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{entities::User, errors::AuthError, ports::UserRepository};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  name: String,
  email: String,
  password_hash: String,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::from_db(row.id, row.name, row.email, row.password_hash)
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    // The unique constraint on email is the single source of truth for
    // duplicates; a violation surfaces as RepositoryError::DuplicateKey.
    let result = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash
            "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.password_hash.as_str())
    .fetch_one(&self.pool)
    .await;

    match result {
      Ok(row) => Ok(row.into()),
      Err(e) => {
        tracing::error!("Failed to create user: {}", e);
        Err(e.into())
      }
    }
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let result = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(row) => Ok(row.map(Into::into)),
      Err(e) => {
        tracing::error!("Failed to find user by id {}: {}", id, e);
        Err(e.into())
      }
    }
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
    let result = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(row) => Ok(row.map(Into::into)),
      Err(e) => {
        tracing::error!("Failed to find user by email: {}", e);
        Err(e.into())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::RepositoryError;
  use crate::domain::auth::value_objects::PasswordHash;
  use sqlx::postgres::PgPoolOptions;
  use testcontainers::ImageExt;
  use testcontainers_modules::postgres::Postgres;
  use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};

  async fn setup_test_db() -> (PgPool, ContainerAsync<Postgres>) {
    // Start a PostgreSQL container
    let container = Postgres::default()
      .with_tag("16-alpine")
      .start()
      .await
      .expect("Failed to start postgres container");

    // Build connection string
    let host = container.get_host().await.expect("Failed to get host");
    let port = container
      .get_host_port_ipv4(5432)
      .await
      .expect("Failed to get port");
    let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    // Connect to the database
    let pool = PgPoolOptions::new()
      .max_connections(5)
      .connect(&database_url)
      .await
      .expect("Failed to connect to test database");

    // Run migrations
    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    (pool, container)
  }

  fn user(name: &str, email: &str) -> User {
    User::new(
      name.to_string(),
      email.to_string(),
      PasswordHash::new("hashed_password"),
    )
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_create_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let user = user("Test User", "test@example.com");
    let created_user = repo.create(user.clone()).await.unwrap();

    assert_eq!(created_user.id, user.id);
    assert_eq!(created_user.email, user.email);
    assert_eq!(created_user.name, user.name);
    assert_eq!(created_user.password_hash.as_str(), "hashed_password");
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_find_by_email_and_id() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let created = repo.create(user("Find User", "find@example.com")).await.unwrap();

    let by_email = repo.find_by_email("find@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some("find@example.com".to_string()));

    assert!(repo.find_by_email("missing@example.com").await.unwrap().is_none());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
  }

  #[tokio::test]
  #[ignore = "requires a Docker daemon"]
  async fn test_duplicate_email() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    repo.create(user("User One", "duplicate@example.com")).await.unwrap();
    let result = repo.create(user("User Two", "duplicate@example.com")).await;

    match result {
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {}
      other => panic!("Expected Repository(DuplicateKey) error, got {:?}", other),
    }
  }
}
