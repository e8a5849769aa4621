use super::*;
use crate::net::types::{AnalysisResult, AnalyzeRequest, LoginRequest, ReviewDetail, UserReviews};

#[test]
fn error_detail_reads_string_detail() {
    assert_eq!(
        error_detail(r#"{"detail":"Invalid email or password"}"#),
        Some("Invalid email or password".to_owned())
    );
}

#[test]
fn error_detail_reads_first_validation_message() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"value_error.missing"}]}"#;
    assert_eq!(error_detail(body), Some("field required".to_owned()));
}

#[test]
fn error_detail_ignores_non_json_and_blank() {
    assert_eq!(error_detail("Internal Server Error"), None);
    assert_eq!(error_detail(r#"{"detail":"   "}"#), None);
    assert_eq!(error_detail(r#"{"error":"nope"}"#), None);
    assert_eq!(error_detail(r#"{"detail":42}"#), None);
}

#[test]
fn status_error_prefers_backend_detail() {
    let err = status_error(400, r#"{"detail":"Email already registered"}"#, "Registration failed");
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: "Email already registered".to_owned() }
    );
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn status_error_falls_back_to_generic_message() {
    let err = status_error(500, "", "Login failed");
    assert_eq!(err.to_string(), "Login failed");
}

#[test]
fn review_endpoints_format_expected_paths() {
    assert_eq!(ANALYZE_ENDPOINT, "/api/analyze");
    assert_eq!(user_reviews_endpoint(7), "/api/user/7/reviews");
    assert_eq!(review_endpoint(12), "/api/reviews/12");
}

#[test]
fn decode_body_reads_analysis_result() {
    let result: AnalysisResult = decode_body(r#"{"quality_score":64,"bugs":[],"suggestions":["Split the function"]}"#).unwrap();
    assert_eq!(result.quality_score, 64);
    assert_eq!(result.suggestions, vec!["Split the function".to_owned()]);
}

#[test]
fn decode_body_reports_malformed_review() {
    let err = decode_body::<ReviewDetail>(r#"{"name":"x"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.to_string().starts_with("unexpected response: "));
}

#[test]
fn decode_body_rejects_html_error_page() {
    let err = decode_body::<UserReviews>("<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn missing_review_uses_backend_detail() {
    let err = status_error(404, r#"{"detail":"Review not found"}"#, "Failed to load review");
    assert_eq!(err, ApiError::Status { status: 404, message: "Review not found".to_owned() });
}

#[test]
fn analysis_server_error_without_body_uses_fallback() {
    let err = status_error(502, "<html>Bad Gateway</html>", "Analysis failed");
    assert_eq!(err.to_string(), "Analysis failed");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn review_calls_are_unavailable_without_browser() {
    let config = ClientConfig::default();
    let request = AnalyzeRequest { language: "python".to_owned(), code: "x = 1".to_owned(), user_id: Some(7) };
    assert_eq!(block_on_ready(analyze_code(&config, &request)), Err(ApiError::Unavailable));
    assert_eq!(block_on_ready(fetch_user_reviews(&config, 7)), Err(ApiError::Unavailable));
    assert_eq!(block_on_ready(fetch_review(&config, 3)), Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_is_unavailable_without_browser() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let result = block_on_ready(login(&ClientConfig::default(), &request));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
/// Drive a future that never awaits a pending resource.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
