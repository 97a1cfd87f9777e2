use crate::route::{route_key, wrap, Handler, Method, Middleware};
use std::fmt::{self, Debug, Formatter};

/// Anything a route can be installed into.
///
/// The multiplexer is shared by a root [`Router`] and every router derived from it, so
/// registration only gets `&self`. How patterns are matched, and what happens when the same
/// pattern is registered twice, is up to the implementation.
pub trait Multiplexer {
	fn handle(&self, pattern: String, handler: Handler);
}

/// Registers routes into a [`Multiplexer`] under a base path, wrapped in a middleware chain.
///
/// Routes are meant to be configured up front, before the multiplexer starts serving. Each
/// registration reads the router's state at the time of the call: middlewares added afterwards
/// only apply to later registrations.
pub struct Router<'m, M: ?Sized> {
	mux: &'m M,
	base_path: String,
	middlewares: Vec<Middleware>,
}

impl<'m, M: Multiplexer + ?Sized> Router<'m, M> {
	pub fn new(mux: &'m M) -> Self {
		Self {
			mux,
			base_path: String::new(),
			middlewares: Vec::new(),
		}
	}

	pub fn base_path(&self) -> &str {
		&self.base_path
	}

	pub fn middlewares(&self) -> &[Middleware] {
		&self.middlewares
	}

	/// Appends middlewares to the chain. The first middleware ever added runs first.
	pub fn add_middlewares<I>(&mut self, middlewares: I) -> &mut Self
	where
		I: IntoIterator<Item = Middleware>,
	{
		let before = self.middlewares.len();
		self.middlewares.extend(middlewares);
		tracing::trace!(
			base_path = %self.base_path,
			added = self.middlewares.len() - before,
			total = self.middlewares.len(),
			"middlewares added"
		);
		self
	}

	/// Installs `handler` under `"<METHOD> <base_path><path>"`, wrapped in the current chain.
	pub fn handle(&mut self, method: Method, path: &str, handler: Handler) -> &mut Self {
		let pattern = route_key(&method, &self.base_path, path);
		tracing::debug!(
			route = %pattern,
			middlewares = self.middlewares.len(),
			"registering route"
		);

		self.mux.handle(pattern, wrap(handler, &self.middlewares));
		self
	}

	pub fn get(&mut self, path: &str, handler: Handler) -> &mut Self {
		self.handle(Method::GET, path, handler)
	}

	pub fn post(&mut self, path: &str, handler: Handler) -> &mut Self {
		self.handle(Method::POST, path, handler)
	}

	pub fn put(&mut self, path: &str, handler: Handler) -> &mut Self {
		self.handle(Method::PUT, path, handler)
	}

	pub fn patch(&mut self, path: &str, handler: Handler) -> &mut Self {
		self.handle(Method::PATCH, path, handler)
	}

	pub fn delete(&mut self, path: &str, handler: Handler) -> &mut Self {
		self.handle(Method::DELETE, path, handler)
	}

	/// Starts a new router at `base_path` with no middlewares.
	///
	/// The base path replaces this router's own rather than extending it.
	pub fn group(&self, base_path: &str) -> Router<'m, M> {
		let group = Router {
			mux: self.mux,
			base_path: base_path.to_owned(),
			middlewares: Vec::new(),
		};
		tracing::trace!(base_path = %group.base_path, "group created");
		group
	}

	/// Starts a new router below this one: the suffix is appended to the base path as-is and the
	/// current middlewares are carried over.
	///
	/// ```
	/// use routegroup::{Router, RouteTable};
	///
	/// let table = RouteTable::new();
	/// let api = Router::new(&table);
	/// let users = api.group("/api").sub_group("/users");
	/// assert_eq!(users.base_path(), "/api/users");
	/// assert_eq!(api.base_path(), "");
	/// ```
	pub fn sub_group(&self, suffix: &str) -> Router<'m, M> {
		let mut base_path = String::with_capacity(self.base_path.len() + suffix.len());
		base_path.push_str(&self.base_path);
		base_path.push_str(suffix);

		let group = Router {
			mux: self.mux,
			base_path,
			middlewares: self.middlewares.clone(),
		};
		tracing::trace!(
			base_path = %group.base_path,
			middlewares = group.middlewares.len(),
			"subgroup created"
		);
		group
	}
}

impl<'m, M: ?Sized> Clone for Router<'m, M> {
	fn clone(&self) -> Self {
		Self {
			mux: self.mux,
			base_path: self.base_path.clone(),
			middlewares: self.middlewares.clone(),
		}
	}
}

impl<'m, M: ?Sized> Debug for Router<'m, M> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("base_path", &self.base_path)
			.field("middlewares", &self.middlewares.len())
			.finish()
	}
}
