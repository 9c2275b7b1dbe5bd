//! `tasks/*` → `todos/*` path rewrite.

use super::{Middleware, MiddlewareFuture, Next};
use crate::request::Request;

/// Rewrites any `/tasks/<rest>` path to `/todos/<rest>` before routing, so
/// both spellings serve the same records. The rewrite is internal — the
/// client never sees a redirect.
pub struct RewriteTasks;

impl Middleware for RewriteTasks {
    fn handle<'a>(&'a self, mut req: Request, next: Next<'a>) -> MiddlewareFuture<'a> {
        if let Some(rest) = req.path().strip_prefix("/tasks") {
            req.set_path(format!("/todos{rest}"));
        }
        Box::pin(next.run(req))
    }
}
