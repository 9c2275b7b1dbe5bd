//! End-to-end tests over the assembled app: middleware chain + router +
//! handlers + store, everything short of a TCP socket.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{Duration, Utc};
use http::{HeaderMap, Method, StatusCode};
use serde_json::{Value, json};

use todos::middleware::{RequestLog, RewriteTasks};
use todos::{App, Request, TaskStore, validate};

fn app(store: Arc<TaskStore>) -> App {
    App::new(todos::routes(store))
        .layer(RewriteTasks)
        .layer(RequestLog)
}

fn get(path: &str) -> Request {
    Request::new(Method::GET, path, HeaderMap::new(), Bytes::new())
}

fn delete(path: &str) -> Request {
    Request::new(Method::DELETE, path, HeaderMap::new(), Bytes::new())
}

fn post(path: &str, body: &Value) -> Request {
    let body = serde_json::to_vec(body).unwrap();
    Request::new(Method::POST, path, HeaderMap::new(), Bytes::from(body))
}

fn todo_due_in(id: i64, days: i64) -> Value {
    json!({
        "id": id,
        "name": "Buy milk",
        "dueDate": (Utc::now() + Duration::days(days)).to_rfc3339(),
        "isCompleted": false,
    })
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn create_then_list() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    let res = app.handle(post("/todos", &todo_due_in(1, 1))).await;
    assert_eq!(res.status_code(), StatusCode::CREATED);

    let created = body_json(res.body());
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Buy milk");

    // The location hint is the literal template, not the created id.
    assert_eq!(res.header("location"), Some("/todos/{id}"));
    assert_eq!(res.header("content-type"), Some("application/json"));

    let res = app.handle(get("/todos")).await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let listed = body_json(res.body());
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], 1);
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    for id in [3, 1, 2] {
        let res = app.handle(post("/todos", &todo_due_in(id, 1))).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
    }

    let res = app.handle(get("/todos")).await;
    let ids: Vec<i64> = body_json(res.body())
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [3, 1, 2]);
}

#[tokio::test]
async fn get_by_id() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    app.handle(post("/todos", &todo_due_in(7, 1))).await;

    let res = app.handle(get("/todos/7")).await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(body_json(res.body())["id"], 7);
}

#[tokio::test]
async fn get_missing_returns_404() {
    let app = app(Arc::new(TaskStore::new()));
    let res = app.handle(get("/todos/999")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert!(res.body().is_empty());
}

#[tokio::test]
async fn get_non_integer_id_returns_400() {
    let app = app(Arc::new(TaskStore::new()));
    let res = app.handle(get("/todos/abc")).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_ids_make_lookup_fail() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    // The store accepts duplicate ids; the single-record lookup then cannot
    // answer and reports a server error.
    app.handle(post("/todos", &todo_due_in(5, 1))).await;
    app.handle(post("/todos", &todo_due_in(5, 2))).await;

    let res = app.handle(get("/todos/5")).await;
    assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn past_due_date_is_rejected() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    let res = app.handle(post("/todos", &todo_due_in(1, -1))).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(res.body()),
        json!({ "dueDate": [validate::PAST_DATE] })
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn completed_on_create_is_rejected() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    let mut todo = todo_due_in(1, 1);
    todo["isCompleted"] = json!(true);

    let res = app.handle(post("/todos", &todo)).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(res.body()),
        json!({ "isCompleted": [validate::ALREADY_COMPLETED] })
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn both_violations_are_reported_together() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    let mut todo = todo_due_in(1, -1);
    todo["isCompleted"] = json!(true);

    let res = app.handle(post("/todos", &todo)).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(res.body()),
        json!({
            "dueDate": [validate::PAST_DATE],
            "isCompleted": [validate::ALREADY_COMPLETED],
        })
    );
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn malformed_body_is_rejected_without_touching_store() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    let req = Request::new(
        Method::POST,
        "/todos",
        HeaderMap::new(),
        Bytes::from_static(b"not json"),
    );
    let res = app.handle(req).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    app.handle(post("/todos", &todo_due_in(1, 1))).await;

    let res = app.handle(delete("/todos/1")).await;
    assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
    assert!(res.body().is_empty());

    let res = app.handle(get("/todos/1")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_absent_id_still_returns_204() {
    let app = app(Arc::new(TaskStore::new()));
    let res = app.handle(delete("/todos/42")).await;
    assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn tasks_paths_are_served_as_todos() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    app.handle(post("/todos", &todo_due_in(5, 1))).await;

    let via_tasks = app.handle(get("/tasks/5")).await;
    assert_eq!(via_tasks.status_code(), StatusCode::OK);
    assert_eq!(body_json(via_tasks.body())["id"], 5);

    let via_todos = app.handle(get("/todos/5")).await;
    assert_eq!(via_tasks.body(), via_todos.body());

    // The bare collection path rewrites too.
    let listed = app.handle(get("/tasks")).await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    assert_eq!(body_json(listed.body()).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_via_tasks_path_mutates_the_same_store() {
    let store = Arc::new(TaskStore::new());
    let app = app(Arc::clone(&store));

    let res = app.handle(post("/tasks", &todo_due_in(9, 1))).await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn health_probes_answer() {
    let app = app(Arc::new(TaskStore::new()));

    let res = app.handle(get("/healthz")).await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.body(), b"ok");

    let res = app.handle(get("/readyz")).await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.body(), b"ready");
}

#[tokio::test]
async fn unrouted_paths_return_404() {
    let app = app(Arc::new(TaskStore::new()));
    let res = app.handle(get("/nope")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}
