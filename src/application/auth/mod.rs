//! User identity use cases

mod create_user;
mod get_user;
mod validate_user;

pub use create_user::{CreateUserCommand, CreateUserResponse, CreateUserUseCase};
pub use get_user::{GetUserResponse, GetUserUseCase};
pub use validate_user::{ValidateUserCommand, ValidateUserResponse, ValidateUserUseCase};
