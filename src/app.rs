//! The assembled application: middleware chain + router.

use crate::middleware::{Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// A router wrapped in an ordered middleware chain.
///
/// The first middleware layered on is the outermost — it sees the request
/// first and the response last. Pass the finished `App` to
/// [`Server::serve`](crate::Server::serve), or call [`handle`](App::handle)
/// directly in tests.
pub struct App {
    middleware: Vec<Box<dyn Middleware>>,
    router: Router,
}

impl App {
    pub fn new(router: Router) -> Self {
        Self { middleware: Vec::new(), router }
    }

    /// Appends a middleware to the chain. Returns `self` for chaining.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Runs one request through the chain and router.
    pub async fn handle(&self, req: Request) -> Response {
        let next = Next { chain: &self.middleware, router: &self.router };
        next.run(req).await
    }
}
