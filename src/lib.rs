//! # reqread
//!
//! Reading HTTP request bodies and request parameters, at every level of
//! abstraction a handler might want: raw byte streams, text readers and
//! writers, header+body entities, a directly extracted `String`, explicit
//! parameter rules, name-derived rules and the whole parameter map.
//!
//! The HTTP layer underneath is deliberately small:
//!
//! - Radix-tree routing via [`matchit`], one tree per method
//! - hyper HTTP/1.1 + HTTP/2 on tokio, bodies buffered before routing
//! - Graceful shutdown on SIGTERM / Ctrl-C, draining in-flight requests
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use reqread::{Error, Param, Request, Router, Server};
//!
//! const AGE: Param = Param::new("age").optional();
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let app = Router::new()
//!         .post("/echo", echo)
//!         .get("/age", age);
//!
//!     Server::bind("127.0.0.1:3000".parse().unwrap()).serve(app).await
//! }
//!
//! async fn echo(req: Request) -> Result<String, Error> {
//!     let body: String = req.extract()?;
//!     Ok(body)
//! }
//!
//! async fn age(req: Request) -> Result<String, Error> {
//!     let age: Option<u32> = AGE.bind(req.params())?;
//!     Ok(format!("{age:?}"))
//! }
//! ```

mod binding;
mod entity;
mod error;
mod extract;
mod handler;
mod params;
mod request;
mod response;
mod router;
mod server;

pub mod config;
pub mod controllers;
pub mod logging;
pub mod middleware;

pub use binding::{BindError, FromParam, Nullable, Param};
pub use entity::{HttpEntity, RequestEntity, ResponseEntity};
pub use error::Error;
pub use extract::FromRequest;
pub use handler::Handler;
pub use params::ParamMap;
pub use request::{Request, TextReader};
pub use response::{IntoResponse, Response, ResponseBuilder, ResponseWriter};
pub use router::Router;
pub use server::Server;
