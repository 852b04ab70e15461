use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{CreateUserRequest, UserResponse},
  errors::ApiError,
};
use crate::application::auth::{CreateUserCommand, CreateUserUseCase, GetUserUseCase};

/// Handler for user registration
///
/// POST /users
/// Body: CreateUserRequest (JSON)
/// Response: UserResponse (JSON) with status 201
pub async fn create_user_handler(
  request: web::Json<CreateUserRequest>,
  use_case: web::Data<Arc<CreateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let CreateUserRequest {
    name,
    email,
    password,
  } = request.into_inner();

  let response = use_case
    .execute(CreateUserCommand {
      name,
      email,
      password,
    })
    .await?;

  Ok(HttpResponse::Created().json(UserResponse {
    id: response.user_id,
    name: response.name,
    email: response.email,
  }))
}

/// Handler for fetching a user
///
/// GET /users/{id}
/// Response: UserResponse (JSON) with status 200, or 404
pub async fn get_user_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(UserResponse {
    id: response.user_id,
    name: response.name,
    email: response.email,
  }))
}
