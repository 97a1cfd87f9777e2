use anyhow::Result;
pub use hyper::http::response::Builder as ResponseBuilder;
pub use hyper::{Body, Method, StatusCode};
use std::{future::Future, pin::Pin, sync::Arc};

pub type Request = hyper::Request<Body>;
pub type Response = Pin<Box<dyn Future<Output = Result<hyper::Response<Body>>> + Send>>;

/// A request handler, shared between every route it is installed under.
pub type Handler = Arc<dyn Fn(Request) -> Response + Send + Sync>;

/// Decorates a handler, returning a new handler that usually forwards to the one it was given.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Turns an async function (or any closure returning a future) into a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
	F: Fn(Request) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = Result<hyper::Response<Body>>> + Send + 'static,
{
	Arc::new(move |req: Request| Box::pin(f(req)) as Response)
}

pub fn middleware<F>(f: F) -> Middleware
where
	F: Fn(Handler) -> Handler + Send + Sync + 'static,
{
	Arc::new(f)
}

/// Formats the key a route is registered under: `"<METHOD> <base_path><path>"`.
///
/// The two paths are joined as-is; no slashes are added or collapsed.
pub fn route_key(method: &Method, base_path: &str, path: &str) -> String {
	format!("{} {}{}", method, base_path, path)
}

/// Applies `middlewares` around `handler`, first middleware outermost.
///
/// An empty chain hands back the same handler.
pub fn wrap(handler: Handler, middlewares: &[Middleware]) -> Handler {
	middlewares
		.iter()
		.rev()
		.fold(handler, |next, middleware| middleware(next))
}
