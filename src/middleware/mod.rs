//! Middleware layer.
//!
//! Middleware is an ordered chain of interceptors wrapped around the router.
//! Each one receives the request plus a [`Next`] token and either
//! short-circuits with its own response or forwards down the chain; code
//! placed after the `next.run(req).await` point runs on every exit path,
//! short-circuits included.
//!
//! Built-ins:
//! - [`RequestLog`] — `Started.` / `Finished.` line around every request
//! - [`RewriteTasks`] — serves `tasks/*` paths as `todos/*`

mod log;
mod rewrite;

pub use log::RequestLog;
pub use rewrite::RewriteTasks;

use std::future::Future;
use std::pin::Pin;

use http::StatusCode;

use crate::handler::ErasedHandler as _;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// The boxed future a middleware returns. Borrows from the middleware itself
/// and from the rest of the chain, hence the lifetime.
pub type MiddlewareFuture<'a> = Pin<Box<dyn Future<Output = Response> + Send + 'a>>;

/// One interceptor in the chain.
pub trait Middleware: Send + Sync + 'static {
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> MiddlewareFuture<'a>;
}

/// The remainder of the chain, ending at the router.
///
/// Consuming `self` in [`run`](Next::run) means a middleware can forward at
/// most once per request.
pub struct Next<'a> {
    pub(crate) chain: &'a [Box<dyn Middleware>],
    pub(crate) router: &'a Router,
}

impl Next<'_> {
    /// Runs the rest of the chain and, past the last middleware, dispatches
    /// to the router. Unrouted requests get `404 Not Found`.
    pub async fn run(self, mut req: Request) -> Response {
        match self.chain.split_first() {
            Some((middleware, rest)) => {
                let next = Next { chain: rest, router: self.router };
                middleware.handle(req, next).await
            }
            None => match self.router.lookup(req.method(), req.path()) {
                Some((handler, params)) => {
                    req.set_params(params);
                    handler.call(req).await
                }
                None => Response::status(StatusCode::NOT_FOUND),
            },
        }
    }
}
