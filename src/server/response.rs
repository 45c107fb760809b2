use may_minihttp::Response;

use crate::store::StoreOutcome;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "OK",
    }
}

/// Write a store outcome to the wire.
///
/// Every response carries the open CORS header and the JSON content type,
/// body or not. Bodies are pretty-printed with two-space indentation.
pub fn write_store_response(res: &mut Response, outcome: StoreOutcome) {
    let status = outcome.status();
    res.status_code(status as usize, status_reason(status));
    res.header("Access-Control-Allow-Origin: *");
    res.header("Content-Type: application/json");
    if let Some(body) = outcome.into_body() {
        if let Ok(bytes) = serde_json::to_vec_pretty(&body) {
            res.body_vec(bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(204), "No Content");
        assert_eq!(status_reason(405), "Method Not Allowed");
        assert_eq!(status_reason(404), "Not Found");
    }
}
