use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{CreateUserUseCase, GetUserUseCase, ValidateUserUseCase};

use super::errors::{json_error_handler, path_error_handler};
use super::handlers::auth::validate_handler;
use super::handlers::users::{create_user_handler, get_user_handler};

/// Configure user routes
///
/// Mounted under a scope such as `/users`.
///
/// # Routes
///
/// - POST "" - Register a new user
/// - GET /{id} - Fetch a user by id
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateUserUseCase>,
  get_use_case: Arc<GetUserUseCase>,
) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(get_use_case))
    .route("", web::post().to(create_user_handler))
    .route("/{id}", web::get().to(get_user_handler));
}

/// Configure authentication routes
///
/// Mounted under a scope such as `/auth`.
///
/// # Routes
///
/// - POST /validate - Check an email/password pair
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  validate_use_case: Arc<ValidateUserUseCase>,
) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::Data::new(validate_use_case))
    .route("/validate", web::post().to(validate_handler));
}
