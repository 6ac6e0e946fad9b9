//! Bearer token helpers.
//!
//! Tokens are opaque and checked by shape only: there is no signature and no
//! server-side session table behind them.

use uuid::Uuid;

/// Scheme prefix every accepted token starts with, trailing space included.
pub const BEARER_PREFIX: &str = "Bearer ";

/// A token must be strictly longer than this many characters.
const MIN_TOKEN_LEN: usize = 10;

/// Returns `true` when `token` looks like a bearer credential: longer than ten
/// characters and starting with `"Bearer "`. Both conditions are required.
pub fn validate_token(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_LEN && token.starts_with(BEARER_PREFIX)
}

/// Issues a fresh `Bearer <uuid>` token for a logged-in user.
pub fn issue_token() -> String {
    format!("{}{}", BEARER_PREFIX, Uuid::new_v4().simple())
}
