//! Command line surface and the default "log in from the config file" flow.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::auth::authenticate;
use crate::config::{require, DEFAULT_CONFIG_PATH};
use crate::error::AppError;
use crate::models::User;

#[derive(Debug, Parser)]
#[command(name = "taskkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Task tracker with a flat key-value config file")]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate with the `username` / `password` from the config file (default)
    Login,
    /// Start the HTTP API
    Serve,
}

/// Authenticates with the credentials stored in a parsed config file.
///
/// Missing `username` or `password` keys are a configuration error; wrong
/// credentials are `Ok(None)`.
pub fn login_from_config(config: &HashMap<String, String>) -> Result<Option<User>, AppError> {
    let username = require(config, "username")?;
    let password = require(config, "password")?;
    Ok(authenticate(username, password))
}

pub fn login_message(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome, {}", user.name),
        None => "Authentication failed".to_string(),
    }
}
