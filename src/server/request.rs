use may_minihttp::Request;
use std::io::Read;
use tracing::debug;

/// Parsed HTTP request data used by `StoreService`.
///
/// The query list keeps every pair in order — repeated keys are meaningful
/// to both the filter (`k=v&k2=v2`) and the projector (`cols=a&cols=b`).
#[derive(Debug, PartialEq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path with the query string stripped
    pub path: String,
    /// Query string pairs, in request order, repeats preserved
    pub query_params: Vec<(String, String)>,
    /// Raw request body, if one was sent (decoded lossily as UTF-8)
    pub body: Option<String>,
}

/// Parse query string pairs from a URL path.
///
/// Extracts everything after `?` and URL-decodes names and values.
#[must_use]
pub fn parse_query_params(raw_path: &str) -> Vec<(String, String)> {
    if let Some(pos) = raw_path.find('?') {
        let query_str = &raw_path[pos + 1..];
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        Vec::new()
    }
}

/// Extract method, path, query pairs and body from a raw request.
///
/// The body is buffered in full here, before any document access — the
/// engine never runs against a partially-read request.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();
    let query_params = parse_query_params(&raw_path);

    let mut buf = Vec::new();
    let body = match req.body().read_to_end(&mut buf) {
        Ok(size) if size > 0 => Some(String::from_utf8_lossy(&buf).into_owned()),
        _ => None,
    };

    debug!(
        method = %method,
        path = %path,
        param_count = query_params.len(),
        body_bytes = buf.len(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        query_params,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let q = parse_query_params("/p?x=1&y=2");
        assert_eq!(q, vec![("x".into(), "1".into()), ("y".into(), "2".into())]);
    }

    #[test]
    fn test_repeated_keys_preserved() {
        let q = parse_query_params("/p?cols=a&cols=b,c");
        assert_eq!(
            q,
            vec![("cols".into(), "a".into()), ("cols".into(), "b,c".into())]
        );
    }

    #[test]
    fn test_no_query() {
        assert!(parse_query_params("/p").is_empty());
    }
}
