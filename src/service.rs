//! Service abstraction between a connection and the application.
use std::convert::Infallible;

// ===== Service =====

/// An asynchronous function from a request to a response.
pub trait Service<Request> {
    type Response;

    type Error;

    fn call(&self, request: Request) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

// ===== FromFn =====

/// Create a [`Service`] from an async function.
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

#[derive(Debug)]
pub struct FromFn<F> {
    f: F,
}

impl<F, Fut, Req, Res> Service<Req> for FromFn<F>
where
    F: Fn(Req) -> Fut,
    Fut: Future<Output = Res> + Send,
{
    type Response = Res;

    type Error = Infallible;

    fn call(&self, request: Req) -> impl Future<Output = Result<Res, Infallible>> + Send {
        let future = (self.f)(request);
        async move { Ok(future.await) }
    }
}
