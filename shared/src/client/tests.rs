use super::*;
use crate::protocol::HttpMethod;
use crate::request::MockHttpClient;
use crate::{LoginRequest, TermRequest};
use serde_json::json;
use std::cell::Cell;

const BASE: &str = "http://api.test";

fn client_with(tokens: MemoryTokenStore) -> ApiClient<MockHttpClient, MemoryTokenStore> {
    ApiClient::new(BASE, MockHttpClient::new(), tokens)
}

// =========================================================
// 认证头
// =========================================================

#[tokio::test]
async fn test_login_then_requests_carry_bearer_token() {
    let tokens = MemoryTokenStore::new();
    let client = client_with(tokens.clone());
    client.http().mock_response(
        HttpMethod::Post,
        "http://api.test/users/login/",
        200,
        json!({ "access_token": "T1" }),
    );
    client
        .http()
        .mock_response(HttpMethod::Get, "http://api.test/terms", 200, json!([]));

    let resp = client
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .await
        .unwrap();
    assert_eq!(resp.access_token, "T1");

    // 登录请求本身不带 Token
    let login_req = client.http().last_request();
    assert!(!login_req.headers.contains_key(HEADER_AUTHORIZATION));
    assert_eq!(
        login_req.body_json(),
        json!({ "email": "a@b.com", "password": "x" })
    );

    tokens.set(&resp.access_token);
    client.list_terms().await.unwrap();

    let req = client.http().last_request();
    assert_eq!(
        req.headers.get(HEADER_AUTHORIZATION).map(String::as_str),
        Some("Bearer T1")
    );
}

#[tokio::test]
async fn test_json_body_sets_content_type() {
    let client = client_with(MemoryTokenStore::with_token("T1"));
    client.http().mock_response(
        HttpMethod::Post,
        "http://api.test/terms",
        201,
        json!({ "id": "t1", "name": "Fall", "user_id": "u1", "start_date": "2024-09-01", "end_date": "2024-12-15" }),
    );

    client
        .create_term(&TermRequest {
            name: "Fall".into(),
            start_date: "2024-09-01".into(),
            end_date: "2024-12-15".into(),
        })
        .await
        .unwrap();

    let req = client.http().last_request();
    assert_eq!(
        req.headers.get(HEADER_CONTENT_TYPE).map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_trimmed() {
    let client = ApiClient::new("http://api.test/", MockHttpClient::new(), MemoryTokenStore::new());
    assert_eq!(client.base_url(), "http://api.test");
    let _ = client.list_courses().await;
    assert_eq!(client.http().last_request().url, "http://api.test/courses");
}

// =========================================================
// Token 过期
// =========================================================

#[tokio::test]
async fn test_token_expiry_clears_token_and_notifies() {
    let tokens = MemoryTokenStore::with_token("stale");
    let notified = Rc::new(Cell::new(0));
    let hook_count = Rc::clone(&notified);
    let client = client_with(tokens.clone()).on_token_expired(move || {
        hook_count.set(hook_count.get() + 1);
    });
    client.http().mock_response(
        HttpMethod::Get,
        "http://api.test/assignments",
        401,
        json!({ "detail": "Token expirado" }),
    );

    let err = client.list_assignments().await.unwrap_err();

    assert_eq!(err, ApiError::TokenExpired);
    assert_eq!(tokens.get(), None);
    assert_eq!(notified.get(), 1);
}

#[tokio::test]
async fn test_other_errors_keep_token() {
    let tokens = MemoryTokenStore::with_token("T1");
    let notified = Rc::new(Cell::new(false));
    let flag = Rc::clone(&notified);
    let client = client_with(tokens.clone()).on_token_expired(move || flag.set(true));
    client.http().mock_response(
        HttpMethod::Delete,
        "http://api.test/courses/c1",
        403,
        json!({ "detail": "Not allowed" }),
    );

    let err = client.delete_course("c1").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 403,
            detail: Some("Not allowed".into())
        }
    );
    assert_eq!(tokens.get().as_deref(), Some("T1"));
    assert!(!notified.get());
}

#[test]
fn test_is_token_expired_only_matches_marker() {
    assert!(is_token_expired(r#"{"detail":"Token expirado"}"#));
    assert!(!is_token_expired(r#"{"detail":"Invalid credentials"}"#));
    assert!(!is_token_expired(r#"{"detail":[{"msg":"Token expirado"}]}"#));
    assert!(!is_token_expired("<html>bad gateway</html>"));
    assert!(!is_token_expired(""));
}

#[test]
fn test_structured_detail_is_stringified() {
    let detail = error_detail(r#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#);
    assert!(detail.unwrap().contains("field required"));
}

// =========================================================
// 传输与解码错误
// =========================================================

#[tokio::test]
async fn test_network_failure_is_reported_once() {
    let client = client_with(MemoryTokenStore::with_token("T1"));
    client.http().go_offline();

    let err = client.list_plans().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    // 不重试
    assert_eq!(client.http().requests.borrow().len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let client = client_with(MemoryTokenStore::with_token("T1"));
    client.http().mock_response(
        HttpMethod::Get,
        "http://api.test/dashboard/streaks/",
        200,
        json!({ "unexpected": true }),
    );

    let err = client.streaks().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_empty_success_body_decodes_unit() {
    let client = client_with(MemoryTokenStore::with_token("T1"));
    client
        .http()
        .mock_empty(HttpMethod::Delete, "http://api.test/terms/t1", 204);

    client.delete_term("t1").await.unwrap();
}
