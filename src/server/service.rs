use super::request::{parse_request, ParsedRequest};
use super::response::write_store_response;
use crate::segment::split_segments;
use crate::store::{self, SharedDocument, StoreOutcome};
use http::Method;
use may_minihttp::{HttpService, Request, Response};
use serde_json::Value;
use std::io;
use tracing::debug;

/// The HTTP service fronting the shared document.
///
/// Cloned once per connection by the server; every clone addresses the same
/// tree. GET takes the read lock, mutating verbs take the write lock, and
/// the lock spans only the synchronous engine step — the body is fully
/// buffered before any document access.
#[derive(Clone)]
pub struct StoreService {
    store: SharedDocument,
}

impl StoreService {
    /// Build a service over an existing shared document.
    #[must_use]
    pub fn new(store: SharedDocument) -> Self {
        Self { store }
    }

    /// Build a service with a fresh document seeded from `seed`.
    ///
    /// Non-mapping seeds are discarded in favor of an empty mapping.
    #[must_use]
    pub fn with_seed(seed: Value) -> Self {
        Self {
            store: store::new_document(seed),
        }
    }

    /// Handle to the shared document, for embedding and tests.
    #[must_use]
    pub fn document(&self) -> SharedDocument {
        self.store.clone()
    }
}

impl HttpService for StoreService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest {
            method,
            path,
            query_params,
            body,
        } = parse_request(req);

        let segments = split_segments(&path);
        let method: Method = match method.parse() {
            Ok(m) => m,
            Err(_) => {
                write_store_response(res, StoreOutcome::NotFound);
                return Ok(());
            }
        };

        let outcome = if method == Method::GET {
            let document = self.store.read().unwrap();
            store::read(&document, &segments, &query_params)
        } else {
            let mut document = self.store.write().unwrap();
            store::apply(&mut document, &method, &segments, body.as_deref())
        };

        debug!(
            method = %method,
            path = %path,
            status = outcome.status(),
            "request applied"
        );
        write_store_response(res, outcome);
        Ok(())
    }
}
