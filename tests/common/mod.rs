//! Shared helpers for integration tests: May runtime setup, server
//! startup on a free port, and a raw-TCP HTTP client small enough to not
//! hide what goes over the wire.

use doctree::server::{HttpServer, ServerHandle, StoreService};
use serde_json::Value;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Once;
use std::time::Duration;

/// Ensures May coroutines are configured only once.
static MAY_INIT: Once = Once::new();

pub fn setup_may_runtime() {
    MAY_INIT.call_once(|| {
        may::config().set_stack_size(0x8000);
    });
}

/// Start a store server seeded with `seed`, bound to a random free port.
pub fn start_store(seed: Value) -> (ServerHandle, SocketAddr) {
    setup_may_runtime();
    // Bind to port 0 to pick a free port, then release it for the server.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let handle = HttpServer(StoreService::with_seed(seed))
        .start(addr)
        .unwrap();
    handle.wait_ready().unwrap();
    (handle, addr)
}

/// A response split into the pieces the tests assert on.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: String,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body as JSON; panics with the raw body on failure.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {:?}", self.body))
    }

    pub fn has_header(&self, line: &str) -> bool {
        self.headers
            .lines()
            .any(|l| l.eq_ignore_ascii_case(line))
    }
}

/// Send one request and read the full response off the socket.
pub fn http(addr: &SocketAddr, method: &str, path: &str, body: Option<&str>) -> HttpResponse {
    let payload = body.unwrap_or("");
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let raw = send_request(addr, &req);

    let (head, body) = raw
        .split_once("\r\n\r\n")
        .unwrap_or_else(|| panic!("malformed response: {raw:?}"));
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .unwrap_or_else(|| panic!("no status line in: {head:?}"));
    HttpResponse {
        status,
        headers: head.to_string(),
        body: body.to_string(),
    }
}

fn send_request(addr: &SocketAddr, req: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(req.as_bytes()).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_millis(1000)))
        .unwrap();

    // Read headers first, then however much body Content-Length promises.
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    let mut header_end = None;
    while header_end.is_none() {
        match stream.read(&mut tmp) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&tmp[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    header_end = Some(pos + 4);
                }
            }
            Err(_) => break,
        }
    }
    if let Some(start) = header_end {
        let content_length = String::from_utf8_lossy(&buf[..start])
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while buf.len() < start + content_length {
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(_) => break,
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}
