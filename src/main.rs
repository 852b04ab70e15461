use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use identity_service::{
  adapters::http::{
    RequestIdMiddleware, configure_auth_routes, configure_user_routes, health_check,
  },
  application::auth::{CreateUserUseCase, GetUserUseCase, ValidateUserUseCase},
  domain::auth::{ports::UserRepository, services::CredentialService},
  infrastructure::{
    config::{Config, DatabaseConfig},
    persistence::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "identity_service=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting identity service");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid configuration: {}", e),
    )
  })?;
  tracing::info!("Configuration loaded successfully");

  let user_repo: Arc<dyn UserRepository> = match &config.database {
    Some(database) => {
      let db_pool = connect_database(database).await?;
      Arc::new(PostgresUserRepository::new(db_pool)) as Arc<dyn UserRepository>
    }
    None => {
      tracing::warn!("No database configured, users are kept in memory and lost on restart");
      Arc::new(InMemoryUserRepository::new()) as Arc<dyn UserRepository>
    }
  };

  let password_hasher = Arc::new(
    Argon2PasswordHasher::from_config(&config.security).map_err(|e| {
      tracing::error!("Invalid password hashing parameters: {}", e);
      std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?,
  );

  let credential_service = Arc::new(CredentialService::new(user_repo, password_hasher));

  let create_user_use_case = Arc::new(CreateUserUseCase::new(credential_service.clone()));
  let get_user_use_case = Arc::new(GetUserUseCase::new(credential_service.clone()));
  let validate_user_use_case = Arc::new(ValidateUserUseCase::new(credential_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let create_user_use_case = create_user_use_case.clone();
    let get_user_use_case = get_user_use_case.clone();
    let validate_user_use_case = validate_user_use_case.clone();

    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(web::scope("/users").configure(|cfg| {
        configure_user_routes(cfg, create_user_use_case, get_user_use_case)
      }))
      .service(
        web::scope("/auth").configure(|cfg| configure_auth_routes(cfg, validate_user_use_case)),
      )
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Connects to PostgreSQL and applies pending migrations
async fn connect_database(config: &DatabaseConfig) -> std::io::Result<sqlx::PgPool> {
  tracing::info!("Connecting to database");

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.max_connections)
      .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
      .connect(&config.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  Ok(db_pool)
}
