//! Route groups and middleware chains for an existing HTTP multiplexer.
//!
//! ```
//! use routegroup::{handler, middleware, Body, Handler, Request, ResponseBuilder, RouteTable, Router};
//!
//! async fn login(_req: Request) -> anyhow::Result<hyper::Response<Body>> {
//! 	Ok(ResponseBuilder::default().body(Body::empty())?)
//! }
//!
//! async fn list_users(_req: Request) -> anyhow::Result<hyper::Response<Body>> {
//! 	Ok(ResponseBuilder::default().body(Body::empty())?)
//! }
//!
//! let auth = middleware(|next: Handler| next);
//! let table = RouteTable::new();
//!
//! let mut root = Router::new(&table);
//! root.add_middlewares(vec![auth]).post("/login", handler(login));
//! root.sub_group("/users")
//! 	.get("", handler(list_users))
//! 	.get("/{id}", handler(list_users));
//!
//! assert_eq!(table.patterns(), vec!["POST /login", "GET /users", "GET /users/{id}"]);
//! ```
//!
//! Every registration goes to the [`Multiplexer`] as a single `"<METHOD> <path>"` pattern with
//! the router's middlewares already applied. The first middleware added is the outermost.
//! [`Router::group`] starts over with a new base path and no middlewares, while
//! [`Router::sub_group`] extends the base path and keeps a copy of the current middlewares.
//! Neither touches the router it was derived from.
//!
//! Matching and dispatching requests is left to the multiplexer. [`RouteTable`] is provided as
//! a simple one that just records what was registered.

/// Handler and middleware types, and how they are composed.
pub mod route;

/// The router and the multiplexer it registers into.
pub mod router;

mod table;

pub use route::*;
pub use router::*;
pub use table::RouteTable;
