use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{UserResponse, ValidateUserRequest},
  errors::ApiError,
};
use crate::application::auth::{ValidateUserCommand, ValidateUserUseCase};

/// Handler for credential validation
///
/// POST /auth/validate
/// Body: ValidateUserRequest (JSON)
/// Response: UserResponse (JSON) with status 200, or 401 "Invalid credentials"
pub async fn validate_handler(
  request: web::Json<ValidateUserRequest>,
  use_case: web::Data<Arc<ValidateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let ValidateUserRequest { email, password } = request.into_inner();

  let response = use_case
    .execute(ValidateUserCommand { email, password })
    .await?;

  Ok(HttpResponse::Ok().json(UserResponse {
    id: response.user_id,
    name: response.name,
    email: response.email,
  }))
}
