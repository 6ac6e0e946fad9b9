pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

pub use tasks::{new_task_store, TaskStore};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(auth::login)).service(
        web::scope("/tasks")
            .service(tasks::list_tasks)
            .service(tasks::create_task)
            .service(tasks::get_task)
            .service(tasks::complete_task),
    );
}
