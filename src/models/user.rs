use serde::{Deserialize, Serialize};

const ADMIN_EMAIL_SUFFIX: &str = "@admin.com";

/// An authenticated user. Only ever produced by a successful
/// [`authenticate`](crate::auth::authenticate) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Administrators are recognised purely by their email domain.
    pub fn is_admin(&self) -> bool {
        self.email.ends_with(ADMIN_EMAIL_SUFFIX)
    }
}
