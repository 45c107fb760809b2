//! # Doctree
//!
//! **Doctree** is a minimal HTTP-addressable JSON document store: an
//! arbitrarily nested mapping/sequence structure held in process memory,
//! where every URL path addresses a node in that structure and the HTTP
//! method selects a CRUD-style operation on the node and its parent.
//!
//! ## Overview
//!
//! A request like `PUT /users/42/profile` is split into segments, walked
//! against the in-memory document, and applied as a structural mutation on
//! the addressed slot. `GET` reads (with optional array filtering and column
//! projection), `POST` appends to arrays, `PUT` replaces, `PATCH` merges,
//! `DELETE` removes. The store lives for the process lifetime only — there
//! is no persistence, authentication, or multi-node story by design.
//!
//! ## Architecture
//!
//! - **[`segment`]** - URL path → segment tokens
//! - **[`store`]** - the document tree: navigation, filtering, projection,
//!   and the per-verb mutation engine
//! - **[`server`]** - HTTP adapter built on `may_minihttp` with
//!   request/response types
//! - **[`config`]** / **[`runtime_config`]** - bind address and coroutine
//!   runtime settings
//! - **[`cli`]** - the `doctree serve` command line
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctree::server::{HttpServer, StoreService};
//! use serde_json::json;
//!
//! let service = StoreService::with_seed(json!({ "pets": [] }));
//! let handle = HttpServer(service).start("0.0.0.0:3075").expect("bind failed");
//! handle.join().expect("server failed");
//! ```
//!
//! ## Runtime Considerations
//!
//! Doctree uses the `may` coroutine runtime, not tokio or async-std. Each
//! connection is served by a lightweight coroutine; the stack size is
//! configurable via the `DOCTREE_STACK_SIZE` environment variable. The
//! document is shared behind a read/write lock held only for the synchronous
//! apply step of each request — concurrent writers get no ordering guarantee
//! beyond that.

pub mod cli;
pub mod config;
pub mod runtime_config;
pub mod segment;
pub mod server;
pub mod store;

pub use config::ServerConfig;
pub use segment::split_segments;
pub use store::{navigate, Navigation, SharedDocument, StoreOutcome};
