//! Request routing.
//!
//! [`Router`] holds an ordered route table, the first route whose [`Matcher`] accepts the request
//! path selects the [`Handler`]. Unmatched requests go to [`Handler::NotFound`].
use std::convert::Infallible;

use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::service::Service;
use crate::storage::Storage;

mod handler;
mod error;

pub use handler::Handler;
pub use error::HandlerError;


/// Path predicate of a [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Path is equal to the value.
    Exact(&'static str),
    /// Path starts with the value.
    Prefix(&'static str),
}

impl Matcher {
    /// Returns `true` if the path is accepted.
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(value) => path == *value,
            Self::Prefix(value) => path.starts_with(value),
        }
    }
}

/// A [`Matcher`] and [`Handler`] pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub matcher: Matcher,
    pub handler: Handler,
}

impl Route {
    /// Create new [`Route`].
    #[inline]
    pub const fn new(matcher: Matcher, handler: Handler) -> Self {
        Self { matcher, handler }
    }
}

/// Ordered route table.
#[derive(Debug)]
pub struct Router<S> {
    routes: Vec<Route>,
    storage: S,
}

impl<S> Router<S> {
    /// Create [`Router`] with the server routes:
    ///
    /// 1. `/` exactly, [`Handler::Root`]
    /// 2. `/user-agent` exactly, [`Handler::UserAgent`]
    /// 3. `/echo/` prefix, [`Handler::Echo`]
    /// 4. `/files/` prefix, [`Handler::Files`]
    pub fn new(storage: S) -> Self {
        Self {
            routes: vec![
                Route::new(Matcher::Exact("/"), Handler::Root),
                Route::new(Matcher::Exact("/user-agent"), Handler::UserAgent),
                Route::new(Matcher::Prefix("/echo/"), Handler::Echo),
                Route::new(Matcher::Prefix("/files/"), Handler::Files),
            ],
            storage,
        }
    }

    /// Append a route after every existing route.
    ///
    /// Existing routes keep precedence.
    pub fn route(mut self, matcher: Matcher, handler: Handler) -> Self {
        self.routes.push(Route::new(matcher, handler));
        self
    }

    /// Returns the route table in match order.
    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the storage used by [`Handler::Files`].
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Select the handler for given path.
    pub fn find(&self, path: &str) -> Handler {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map_or(Handler::NotFound, |route| route.handler)
    }
}

impl<S: Storage> Router<S> {
    /// Dispatch request to its handler.
    ///
    /// Handler failures are converted into the corresponding response.
    pub async fn handle(&self, req: Request) -> Response {
        let handler = self.find(req.path());
        handler.call(req, &self.storage).await.into_response()
    }
}

impl<S: Storage> Service<Request> for Router<S> {
    type Response = Response;

    type Error = Infallible;

    fn call(&self, request: Request) -> impl Future<Output = Result<Response, Infallible>> + Send {
        async move { Ok(self.handle(request).await) }
    }
}
