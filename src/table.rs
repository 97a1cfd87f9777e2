use crate::{route::Handler, router::Multiplexer};
use anyhow::{bail, Result};
use std::{
	fmt::{self, Debug, Formatter},
	sync::{Arc, Mutex},
};

/// A [`Multiplexer`] that keeps every registration in the order it was made.
///
/// Patterns are stored exactly as the router formats them. Registering the same pattern twice
/// through [`Multiplexer::handle`] panics, so conflicting routes surface at startup.
#[derive(Default)]
pub struct RouteTable {
	routes: Mutex<Vec<(String, Handler)>>,
}

impl RouteTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a route, failing if `pattern` is already taken.
	pub fn insert(&self, pattern: String, handler: Handler) -> Result<()> {
		let mut routes = self.routes.lock().unwrap();
		if routes.iter().any(|(existing, _)| *existing == pattern) {
			bail!("pattern {:?} is already registered", pattern);
		}

		routes.push((pattern, handler));
		Ok(())
	}

	pub fn get(&self, pattern: &str) -> Option<Handler> {
		self.routes
			.lock()
			.unwrap()
			.iter()
			.find(|(existing, _)| existing == pattern)
			.map(|(_, handler)| Arc::clone(handler))
	}

	pub fn patterns(&self) -> Vec<String> {
		self.routes
			.lock()
			.unwrap()
			.iter()
			.map(|(pattern, _)| pattern.clone())
			.collect()
	}

	pub fn len(&self) -> usize {
		self.routes.lock().unwrap().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Multiplexer for RouteTable {
	fn handle(&self, pattern: String, handler: Handler) {
		if let Err(e) = self.insert(pattern, handler) {
			panic!("{}", e);
		}
	}
}

impl Debug for RouteTable {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteTable")
			.field("patterns", &self.patterns())
			.finish()
	}
}

#[cfg(test)]
mod test {
	use super::RouteTable;
	use crate::{
		route::{handler, middleware, Body, Handler, Request, ResponseBuilder},
		router::Router,
	};
	use std::sync::Arc;

	async fn ok(_req: Request) -> anyhow::Result<hyper::Response<Body>> {
		Ok(ResponseBuilder::default().status(200).body(Body::empty())?)
	}

	async fn teapot(_req: Request) -> anyhow::Result<hyper::Response<Body>> {
		Ok(ResponseBuilder::default().status(418).body(Body::empty())?)
	}

	#[test]
	fn records_in_order() {
		let table = RouteTable::new();
		assert!(table.is_empty());

		let mut root = Router::new(&table);
		root.get("/a", handler(ok)).put("/b", handler(ok));
		root.sub_group("/c").delete("/{id}", handler(ok));

		assert_eq!(table.len(), 3);
		assert_eq!(table.patterns(), vec!["GET /a", "PUT /b", "DELETE /c/{id}"]);
		assert!(table.get("GET /a").is_some());
		assert!(table.get("GET /b").is_none());
	}

	#[test]
	fn insert_rejects_duplicates() {
		let table = RouteTable::new();
		table.insert("GET /a".to_owned(), handler(ok)).unwrap();

		let err = table.insert("GET /a".to_owned(), handler(ok)).unwrap_err();
		assert_eq!(err.to_string(), r#"pattern "GET /a" is already registered"#);
		assert!(table.insert("POST /a".to_owned(), handler(ok)).is_ok());
		assert_eq!(table.len(), 2);
	}

	#[test]
	#[should_panic(expected = "already registered")]
	fn duplicate_route_panics() {
		let table = RouteTable::new();
		let mut root = Router::new(&table);
		root.get("/a", handler(ok));
		root.group("").get("/a", handler(ok));
	}

	#[tokio::test]
	async fn serves_wrapped_handler() {
		let table = RouteTable::new();
		let to_teapot = middleware(|_next: Handler| handler(teapot));

		Router::new(&table)
			.get("/plain", handler(ok))
			.add_middlewares(vec![to_teapot])
			.get("/wrapped", handler(ok));

		let plain = table.get("GET /plain").unwrap();
		let wrapped = table.get("GET /wrapped").unwrap();
		assert!(!Arc::ptr_eq(&plain, &wrapped));
		assert_eq!(plain(Request::new(Body::empty())).await.unwrap().status(), 200);
		assert_eq!(wrapped(Request::new(Body::empty())).await.unwrap().status(), 418);
		assert_eq!(
			format!("{:?}", table),
			r#"RouteTable { patterns: ["GET /plain", "GET /wrapped"] }"#
		);
	}
}
