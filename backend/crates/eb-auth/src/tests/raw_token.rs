use crate::extract_raw_token;

#[test]
fn given_query_token_when_extracted_then_query_wins() {
    let token = extract_raw_token(Some("from-query"), Some("Bearer from-header"));
    assert_eq!(token, Some("from-query"));
}

#[test]
fn given_empty_query_token_when_extracted_then_header_used() {
    let token = extract_raw_token(Some(""), Some("Bearer from-header"));
    assert_eq!(token, Some("from-header"));
}

#[test]
fn given_header_only_when_extracted_then_bearer_value_returned() {
    assert_eq!(extract_raw_token(None, Some("Bearer abc")), Some("abc"));
}

#[test]
fn given_non_bearer_scheme_when_extracted_then_none() {
    assert_eq!(extract_raw_token(None, Some("Basic abc")), None);
    assert_eq!(extract_raw_token(None, Some("Bearer ")), None);
    assert_eq!(extract_raw_token(None, None), None);
}
