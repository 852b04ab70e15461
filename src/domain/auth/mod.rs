pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{PublicUser, User};
pub use errors::{AuthError, HashError, RepositoryError, ValidationError};
pub use services::CredentialService;
pub use value_objects::{Password, PasswordHash};
