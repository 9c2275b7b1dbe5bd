//! # todos
//!
//! A minimal HTTP API over an in-memory list of to-do records.
//! One entity, one store, no persistence. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! - CRUD over [`ToDo`] records: list, get by id, create, delete by id.
//! - Create-time validation: no past due dates, no already-completed tasks.
//! - `tasks/*` paths are served as `todos/*` via an internal rewrite.
//! - Every request is bracketed by `Started.` / `Finished.` log lines.
//! - All records live in process memory behind a mutex and die on restart.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todos::middleware::{RequestLog, RewriteTasks};
//! use todos::{App, Server, TaskStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), todos::Error> {
//!     let store = Arc::new(TaskStore::new());
//!
//!     let app = App::new(todos::routes(store))
//!         .layer(RewriteTasks)
//!         .layer(RequestLog);
//!
//!     Server::bind("0.0.0.0:3000")?.serve(app).await
//! }
//! ```

mod app;
mod error;
mod handler;
mod model;
mod request;
mod response;
mod router;
mod server;
mod store;
mod todos;

pub mod health;
pub mod middleware;
pub mod validate;

pub use app::App;
pub use error::Error;
pub use handler::Handler;
pub use model::ToDo;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use store::{DuplicateId, TaskStore};
pub use todos::routes;
