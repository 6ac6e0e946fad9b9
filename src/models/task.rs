use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // A title needs at least one visible character.
    static ref TITLE_REGEX: regex::Regex = regex::Regex::new(r"\S").unwrap();
}

/// A single to-do item.
///
/// The title doubles as the lookup key inside a [`TaskList`], but nothing
/// enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a pending task with an empty description.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_description(title, "")
    }

    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Marks the task as done. Calling it again has no further effect.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = if self.completed { "done" } else { "pending" };
        write!(f, "Task({:?}, {})", self.title, status)
    }
}

/// Input structure for creating a task over HTTP.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// Must be between 1 and 200 characters and not entirely whitespace.
    #[validate(
        length(min = 1, max = 200),
        regex(path = "TITLE_REGEX", message = "Task title must not be blank")
    )]
    pub title: String,

    /// Maximum length of 1000 characters if provided.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

impl From<TaskInput> for Task {
    fn from(input: TaskInput) -> Self {
        Task::with_description(input.title, input.description.unwrap_or_default())
    }
}

/// Query parameters accepted when listing tasks.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskQuery {
    /// When `true`, only tasks that are not yet completed are returned.
    pub pending: Option<bool>,
}

/// An ordered collection of tasks, kept in insertion order.
///
/// The list is a plain aggregate with no locking of its own; share it across
/// threads behind a mutex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `task` to the end of the list. Duplicate titles are accepted.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Returns the first task whose title equals `title` exactly.
    pub fn find(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.title == title)
    }

    /// Like [`find`](Self::find), but allows the caller to mutate the match,
    /// e.g. to [`complete`](Task::complete) it.
    pub fn find_mut(&mut self, title: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.title == title)
    }

    /// Returns copies of every uncompleted task, preserving list order.
    pub fn pending(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
