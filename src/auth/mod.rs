pub mod middleware;
pub mod token;

use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

pub use middleware::AuthMiddleware;
pub use token::{issue_token, validate_token};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "secret";

/// Checks a username/password pair against the built-in administrator account.
///
/// Comparison is exact: no trimming, no case folding. Anything other than
/// `admin` / `secret` yields `None`; a failed login is not an error.
pub fn authenticate(username: &str, password: &str) -> Option<User> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        info!("user `{}` authenticated", username);
        return Some(User::new("Admin", "admin@admin.com"));
    }
    None
}

/// Represents the payload for a user login request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response structure after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Full `Authorization` header value, `"Bearer "` prefix included.
    pub token: String,
    pub user: User,
    pub is_admin: bool,
}

impl AuthResponse {
    pub fn for_user(user: User) -> Self {
        Self {
            token: issue_token(),
            is_admin: user.is_admin(),
            user,
        }
    }
}
