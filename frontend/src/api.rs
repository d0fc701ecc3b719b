//! 浏览器端的 API 接线
//!
//! 把共享的 `ApiClient` 接到 fetch 与 LocalStorage 上。
//! 客户端内部使用 `Rc`，不能放进 Context，所以 Context 里只放可复制的 [`Api`] 句柄，
//! 需要时再构造客户端。

use async_trait::async_trait;
use leptos::prelude::*;
use studere_shared::request::{HttpClient, HttpRequest, HttpResponse};
use studere_shared::{ApiClient, ApiError, ApiResult, TokenStore};

use crate::auth::AuthContext;
use crate::config::AppConfig;
use crate::web::{Fetch, LocalStorage};

pub type StudereApi = ApiClient<FetchHttpClient, LocalTokenStore>;

/// 基于 `window.fetch` 的传输层
pub struct FetchHttpClient;

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = Fetch::request(&req.url, req.method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Token 保存在 LocalStorage 的 `token` 键下
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::token()
    }

    fn set(&self, token: &str) {
        LocalStorage::set_token(token);
    }

    fn clear(&self) {
        LocalStorage::clear_token();
    }
}

/// 可复制的 API 句柄
#[derive(Clone, Copy)]
pub struct Api {
    base_url: StoredValue<String>,
    auth: AuthContext,
}

impl Api {
    pub fn new(config: &AppConfig, auth: AuthContext) -> Self {
        Self {
            base_url: StoredValue::new(config.api_base_url.clone()),
            auth,
        }
    }

    /// 构造客户端；Token 过期时通知认证上下文
    pub fn client(&self) -> StudereApi {
        let auth = self.auth;
        ApiClient::new(&self.base_url.get_value(), FetchHttpClient, LocalTokenStore)
            .on_token_expired(move || auth.expire())
    }
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api should be provided")
}
