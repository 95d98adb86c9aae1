use super::*;

/// Tests extraction of a well-formed bearer header.
///
/// Expected: Some(token), regardless of scheme casing
#[test]
fn extracts_token_from_header() {
    let headers = headers_with_token("abc.def.ghi");
    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer xyz"));
    assert_eq!(bearer_token(&headers), Some("xyz"));
}

/// Tests headers that do not carry a usable bearer token.
///
/// Verifies that a missing header, another scheme and an empty token are all rejected.
///
/// Expected: None
#[test]
fn rejects_missing_or_malformed_header() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    assert_eq!(bearer_token(&headers), None);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer    "));
    assert_eq!(bearer_token(&headers), None);
}
