use crate::{
    auth::{authenticate, AuthResponse, LoginRequest},
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use log::warn;
use validator::Validate;

/// Login user
///
/// Checks the credentials and returns a bearer token plus the user profile.
///
/// ## Responses:
/// - `200 OK`: `AuthResponse` JSON.
/// - `401 Unauthorized`: the credentials were rejected.
/// - `422 Unprocessable Entity`: username or password is empty.
#[post("/login")]
pub async fn login(login_data: web::Json<LoginRequest>) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    match authenticate(&login_data.username, &login_data.password) {
        Some(user) => Ok(HttpResponse::Ok().json(AuthResponse::for_user(user))),
        None => {
            warn!("failed login attempt for `{}`", login_data.username);
            Err(AppError::Unauthorized("Invalid credentials".into()))
        }
    }
}
