//! The to-do endpoints.
//!
//! Four handlers over one shared [`TaskStore`]. The store is passed in
//! explicitly — each route closure captures an `Arc` handle, so ownership is
//! visible at the call site instead of hiding in a global.

use std::sync::Arc;

use chrono::Utc;
use http::StatusCode;
use serde::Serialize;
use tracing::{error, warn};

use crate::model::ToDo;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::store::TaskStore;
use crate::validate;

/// Builds the route table for the to-do API, health probes included.
pub fn routes(store: Arc<TaskStore>) -> Router {
    let list_store = Arc::clone(&store);
    let get_store = Arc::clone(&store);
    let create_store = Arc::clone(&store);
    let delete_store = store;

    Router::new()
        .get("/todos", move |req: Request| list(req, Arc::clone(&list_store)))
        .get("/todos/{id}", move |req: Request| get(req, Arc::clone(&get_store)))
        .post("/todos", move |req: Request| create(req, Arc::clone(&create_store)))
        .delete("/todos/{id}", move |req: Request| delete(req, Arc::clone(&delete_store)))
        .get("/healthz", crate::health::liveness)
        .get("/readyz", crate::health::readiness)
}

/// `GET /todos` — every record, insertion order.
async fn list(_req: Request, store: Arc<TaskStore>) -> Response {
    json_ok(&store.list())
}

/// `GET /todos/{id}` — 200 with the record, 404 when absent, 500 when the
/// store holds duplicate ids (the lookup is defined only for one match).
async fn get(req: Request, store: Arc<TaskStore>) -> Response {
    let Some(id) = parse_id(&req) else {
        return Response::status(StatusCode::BAD_REQUEST);
    };

    match store.get(id) {
        Ok(Some(todo)) => json_ok(&todo),
        Ok(None) => Response::status(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("lookup failed: {e}");
            Response::status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `POST /todos` — validates, inserts, echoes the record back with 201.
///
/// Validation failures come back as a 400 whose body maps field name to an
/// array of messages; the store is never touched in that case.
async fn create(req: Request, store: Arc<TaskStore>) -> Response {
    let todo: ToDo = match req.json() {
        Ok(todo) => todo,
        Err(e) => {
            warn!("malformed create body: {e}");
            return Response::status(StatusCode::BAD_REQUEST);
        }
    };

    let errors = validate::check_create(&todo, Utc::now());
    if !errors.is_empty() {
        return match serde_json::to_vec(&errors) {
            Ok(bytes) => Response::builder().status(StatusCode::BAD_REQUEST).json(bytes),
            Err(e) => {
                error!("serializing validation errors failed: {e}");
                Response::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        };
    }

    let created = store.add(todo);
    match serde_json::to_vec(&created) {
        // The location hint is the literal `{id}` template, not the created
        // id. Kept as-is; see DESIGN.md.
        Ok(bytes) => Response::builder()
            .status(StatusCode::CREATED)
            .header("location", "/todos/{id}")
            .json(bytes),
        Err(e) => {
            error!("serializing created to-do failed: {e}");
            Response::status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `DELETE /todos/{id}` — removes every match; 204 either way.
async fn delete(req: Request, store: Arc<TaskStore>) -> Response {
    let Some(id) = parse_id(&req) else {
        return Response::status(StatusCode::BAD_REQUEST);
    };

    store.delete(id);
    Response::status(StatusCode::NO_CONTENT)
}

fn parse_id(req: &Request) -> Option<i64> {
    req.param("id")?.parse().ok()
}

fn json_ok<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => Response::json(bytes),
        Err(e) => {
            error!("serialization failed: {e}");
            Response::status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
