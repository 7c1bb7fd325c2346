use super::*;

// =============================================================
// Form encoding
// =============================================================

#[test]
fn form_body_encodes_reserved_characters() {
    let body = form_body(&[("email", "alice@example.com"), ("password", "p w&d")]);
    assert_eq!(body, "email=alice%40example.com&password=p%20w%26d");
}

#[test]
fn form_body_of_no_pairs_is_empty() {
    assert_eq!(form_body(&[]), "");
}

#[test]
fn form_body_preserves_sql_injection_payloads_verbatim() {
    // The training exercise depends on the payload reaching the backend
    // intact; encoding must be reversible, not sanitizing.
    let body = form_body(&[("email", "' OR '1'='1' --"), ("password", "x")]);
    assert_eq!(body, "email=%27%20OR%20%271%27%3D%271%27%20--&password=x");
}

// =============================================================
// Query paths
// =============================================================

#[test]
fn query_path_encodes_the_value() {
    assert_eq!(
        query_path("/proxy", "url", "http://169.254.169.254/latest/"),
        "/proxy?url=http%3A%2F%2F169.254.169.254%2Flatest%2F"
    );
}

#[test]
fn preview_text_is_encoded_not_stripped() {
    assert_eq!(
        query_path("/preview", "text", "<script>alert(1)</script>"),
        "/preview?text=%3Cscript%3Ealert%281%29%3C%2Fscript%3E"
    );
}

#[test]
fn image_src_routes_through_the_image_fetcher() {
    assert_eq!(
        image_src("http://localhost:8080/local-image?id=1"),
        "/image?url=http%3A%2F%2Flocalhost%3A8080%2Flocal-image%3Fid%3D1"
    );
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn transport_error_display() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn status_error_display() {
    assert_eq!(ApiError::Status(401).to_string(), "request failed with status 401");
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
}

#[test]
fn malformed_error_display() {
    let err = ApiError::Malformed("invalid type: string".to_owned());
    assert_eq!(err.to_string(), "malformed response: invalid type: string");
}
