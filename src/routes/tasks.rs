use std::sync::{Mutex, MutexGuard};

use crate::{
    error::AppError,
    models::{Task, TaskInput, TaskList, TaskQuery},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};
use validator::Validate;

/// The shared, in-memory task list. Nothing here outlives the process.
pub type TaskStore = Mutex<TaskList>;

pub fn new_task_store() -> web::Data<TaskStore> {
    web::Data::new(Mutex::new(TaskList::new()))
}

pub(crate) fn lock(store: &TaskStore) -> Result<MutexGuard<'_, TaskList>, AppError> {
    store.lock().map_err(|e| {
        error!("task store lock poisoned: {}", e);
        AppError::InternalServerError("Task store unavailable".into())
    })
}

/// Lists tasks in insertion order.
///
/// ## Query Parameters:
/// - `pending` (optional): when `true`, only tasks that are not completed.
#[get("")]
pub async fn list_tasks(
    store: web::Data<TaskStore>,
    query: web::Query<TaskQuery>,
) -> Result<impl Responder, AppError> {
    let list = lock(&store)?;
    let tasks: Vec<Task> = if query.pending.unwrap_or(false) {
        list.pending()
    } else {
        list.iter().cloned().collect()
    };
    Ok(HttpResponse::Ok().json(tasks))
}

/// Appends a new task. Titles are not required to be unique.
///
/// ## Responses:
/// - `201 Created`: the new `Task`.
/// - `422 Unprocessable Entity`: the title is blank or too long, or the description is too long.
#[post("")]
pub async fn create_task(
    store: web::Data<TaskStore>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = Task::from(task_data.into_inner());
    lock(&store)?.add(task.clone());
    info!("created {}", task);

    Ok(HttpResponse::Created().json(task))
}

/// Returns the first task with exactly this title.
#[get("/{title}")]
pub async fn get_task(
    store: web::Data<TaskStore>,
    title: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let list = lock(&store)?;
    let task = list
        .find(&title)
        .ok_or_else(|| AppError::NotFound(format!("Task `{}` not found", title)))?;
    Ok(HttpResponse::Ok().json(task))
}

/// Marks the first task with this title as completed. Completing twice is fine.
#[post("/{title}/complete")]
pub async fn complete_task(
    store: web::Data<TaskStore>,
    title: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let mut list = lock(&store)?;
    let task = list
        .find_mut(&title)
        .ok_or_else(|| AppError::NotFound(format!("Task `{}` not found", title)))?;
    task.complete();
    info!("completed {}", task);

    Ok(HttpResponse::Ok().json(&*task))
}
