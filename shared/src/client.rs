//! 带认证的 API 客户端
//!
//! 为每个请求附加 `Authorization: Bearer <token>`，并统一处理 Token 过期：
//! 清除 Token、通知上层（由上层完成跳转到登录页），然后仍把错误返回给调用方。

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::protocol::ApiRequest;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::{HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, TOKEN_EXPIRED_DETAIL};

// =========================================================
// Token 存储抽象
// =========================================================

/// Bearer Token 的持久化位置
///
/// 浏览器中由 LocalStorage 实现，测试中使用 [`MemoryTokenStore`]。
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// 仅存于内存的 Token 存储
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

// =========================================================
// 错误响应解析
// =========================================================

/// 后端错误响应体：`{"detail": ...}`
///
/// `detail` 可能是字符串，也可能是校验错误列表，因此先按任意 JSON 读取。
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// 判断错误响应是否表示 Token 过期
pub fn is_token_expired(body: &str) -> bool {
    error_detail(body).as_deref() == Some(TOKEN_EXPIRED_DETAIL)
}

// =========================================================
// 客户端
// =========================================================

type ExpiryHook = Rc<dyn Fn()>;

/// 带认证的 API 客户端
///
/// `C` 为底层传输，`S` 为 Token 存储。克隆是廉价的（内部全部为共享引用）。
pub struct ApiClient<C: HttpClient, S: TokenStore> {
    base_url: String,
    http: Rc<C>,
    tokens: S,
    on_token_expired: Option<ExpiryHook>,
}

impl<C: HttpClient, S: TokenStore + Clone> Clone for ApiClient<C, S> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: Rc::clone(&self.http),
            tokens: self.tokens.clone(),
            on_token_expired: self.on_token_expired.clone(),
        }
    }
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub fn new(base_url: &str, http: C, tokens: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Rc::new(http),
            tokens,
            on_token_expired: None,
        }
    }

    /// 注册 Token 过期时的回调（通常是让认证上下文登出并跳转登录页）
    pub fn on_token_expired(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_token_expired = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpRequest> {
        let mut http_req = HttpRequest::new(&self.url(&req.path()), R::METHOD);

        if let Some(token) = self.tokens.get() {
            http_req = http_req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        if let Some(body) = req.body() {
            let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            http_req = http_req
                .with_header(HEADER_CONTENT_TYPE, "application/json")
                .with_body(json);
        }

        Ok(http_req)
    }

    /// 发送一个请求并解析响应
    ///
    /// 每次调用恰好产生一次 HTTP 请求，不重试。
    pub async fn send<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let http_req = self.build(req)?;
        debug!(method = R::METHOD.as_str(), url = %http_req.url, "api request");

        let response = self.http.send(http_req).await.map_err(|e| {
            warn!(method = R::METHOD.as_str(), path = %req.path(), error = %e, "api request failed");
            e
        })?;

        if response.is_success() {
            return response.json();
        }

        Err(self.handle_failure::<R>(req, response))
    }

    fn handle_failure<R: ApiRequest>(&self, req: &R, response: HttpResponse) -> ApiError {
        if is_token_expired(&response.body) {
            info!(path = %req.path(), "token expired, clearing session");
            self.tokens.clear();
            if let Some(hook) = &self.on_token_expired {
                hook();
            }
            return ApiError::TokenExpired;
        }

        let detail = error_detail(&response.body);
        warn!(
            method = R::METHOD.as_str(),
            path = %req.path(),
            status = response.status,
            detail = detail.as_deref().unwrap_or(""),
            "api error response"
        );
        ApiError::Status {
            status: response.status,
            detail,
        }
    }
}

#[cfg(test)]
mod tests;
