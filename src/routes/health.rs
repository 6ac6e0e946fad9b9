use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::routes::tasks::{lock, TaskStore};

/// Health check endpoint
///
/// Reports liveness along with the current size of the task list.
#[get("/health")]
pub async fn health(store: web::Data<TaskStore>) -> Result<HttpResponse, AppError> {
    let (total, pending) = {
        let list = lock(&store)?;
        (list.len(), list.pending().len())
    };

    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "tasks": total,
        "pending": pending
    })))
}
