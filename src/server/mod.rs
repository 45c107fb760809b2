//! HTTP adapter over `may_minihttp`.
//!
//! The server side is deliberately thin: [`request`] decodes the raw
//! request into method, path, query pairs and a fully-buffered body;
//! [`service`] feeds that through the store engine under the document lock;
//! [`response`] writes the outcome back with the store's fixed CORS/JSON
//! headers. [`http_server`] wraps server startup and lifecycle.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use response::write_store_response;
pub use service::StoreService;
