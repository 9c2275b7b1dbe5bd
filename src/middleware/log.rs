//! Request logging middleware.

use chrono::Utc;
use tracing::info;

use super::{Middleware, MiddlewareFuture, Next};
use crate::request::Request;

/// Emits `[METHOD PATH timestamp] Started.` before a request is handled and
/// the matching `Finished.` line after, whatever the outcome.
///
/// Layer it after [`RewriteTasks`](super::RewriteTasks) so the logged path is
/// the one that was actually routed.
pub struct RequestLog;

impl Middleware for RequestLog {
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> MiddlewareFuture<'a> {
        Box::pin(async move {
            let method = req.method().clone();
            let path = req.path().to_owned();

            info!("[{method} {path} {}] Started.", Utc::now());
            let response = next.run(req).await;
            info!("[{method} {path} {}] Finished.", Utc::now());

            response
        })
    }
}
