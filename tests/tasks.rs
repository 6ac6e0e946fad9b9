use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serde_json::json;
use taskkit::auth::AuthMiddleware;
use taskkit::models::Task;
use taskkit::routes::{self, new_task_store};

const TOKEN: &str = "Bearer integration-token";

async fn create(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
    title: &str,
) -> Task {
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .set_json(json!({ "title": title }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

#[actix_rt::test]
async fn test_pending_flow() {
    let store = new_task_store();
    let app = test::init_service(
        App::new().app_data(store.clone()).service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .configure(routes::config),
        ),
    )
    .await;

    create(&app, "A").await;
    create(&app, "B").await;

    let req = test::TestRequest::get()
        .uri("/api/tasks?pending=true")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let pending: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pending, vec![Task::new("A"), Task::new("B")]);

    let req = test::TestRequest::post()
        .uri("/api/tasks/A/complete")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let completed: Task = test::call_and_read_body_json(&app, req).await;
    assert!(completed.completed);

    let req = test::TestRequest::get()
        .uri("/api/tasks?pending=true")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let pending: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pending, vec![Task::new("B")]);

    // Without the filter both tasks come back, in insertion order.
    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let all: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    assert_eq!(store.lock().unwrap().pending().len(), 1);
}

#[actix_rt::test]
async fn test_duplicate_titles_are_kept() {
    let app = test::init_service(
        App::new().app_data(new_task_store()).service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .configure(routes::config),
        ),
    )
    .await;

    create(&app, "Same").await;
    create(&app, "Same").await;

    let req = test::TestRequest::post()
        .uri("/api/tasks/Same/complete")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let all: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 2);
    assert!(all[0].completed);
    assert!(!all[1].completed);
}

#[actix_rt::test]
async fn test_find_on_empty_list_is_not_found() {
    let app = test::init_service(
        App::new().app_data(new_task_store()).service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .configure(routes::config),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/tasks/anything")
        .insert_header((header::AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
