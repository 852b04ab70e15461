pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{CreateUserRequest, ErrorResponse, UserResponse, ValidateUserRequest};
pub use errors::{ApiError, AuthErrorKind, json_error_handler, path_error_handler};
pub use handlers::auth::validate_handler;
pub use handlers::health::health_check;
pub use handlers::users::{create_user_handler, get_user_handler};
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{configure_auth_routes, configure_user_routes};
