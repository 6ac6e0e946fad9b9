#![doc = "The `taskkit` library crate."]
#![doc = ""]
#![doc = "Flat `key = value` config parsing, the fixed-credential authenticator,"]
#![doc = "the in-memory task list, and the actix-web routes that expose them."]
#![doc = "The binary (`main.rs`) wires these together."]

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use crate::error::AppError;
pub use crate::models::{Task, TaskList, User};
