use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use todos::middleware::{RequestLog, RewriteTasks};
use todos::{App, Server, TaskStore};

/// Bind address, overridable with `TODOS_ADDR`.
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), todos::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("TODOS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let store = Arc::new(TaskStore::new());

    // Rewrite sits outside the logger so log lines carry the routed path.
    let app = App::new(todos::routes(store))
        .layer(RewriteTasks)
        .layer(RequestLog);

    Server::bind(&addr)?.serve(app).await
}
