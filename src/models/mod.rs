pub mod task;
pub mod user;

pub use task::{Task, TaskInput, TaskList, TaskQuery};
pub use user::User;
