//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 的请求构建器，方法与状态码之外不做任何解释，
//! 认证与错误分类交给 `studere_shared::ApiClient`。

use studere_shared::protocol::HttpMethod;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Fetch 错误类型
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求构建失败
    #[error("failed to build request: {0}")]
    RequestBuildFailed(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    NetworkError(String),
    /// 响应读取失败
    #[error("failed to read response: {0}")]
    ResponseReadFailed(String),
}

/// Fetch 响应封装
pub struct FetchResponse {
    inner: Response,
}

impl FetchResponse {
    /// 获取 HTTP 状态码
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 获取响应体文本
    pub async fn text(self) -> Result<String, FetchError> {
        let promise = self
            .inner
            .text()
            .map_err(|e| FetchError::ResponseReadFailed(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| FetchError::ResponseReadFailed(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| FetchError::ResponseReadFailed("body is not a string".to_string()))
    }
}

/// Fetch 请求构建器
pub struct FetchBuilder {
    url: String,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl FetchBuilder {
    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 设置请求体
    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 发送请求
    pub async fn send(self) -> Result<FetchResponse, FetchError> {
        let headers = Headers::new()
            .map_err(|e| FetchError::RequestBuildFailed(format!("Headers: {:?}", e)))?;

        for (key, value) in &self.headers {
            headers
                .set(key, value)
                .map_err(|e| FetchError::RequestBuildFailed(format!("header {}: {:?}", key, e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(self.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &self.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| FetchError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| FetchError::NetworkError("window is unavailable".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| FetchError::ResponseReadFailed(format!("not a Response: {:?}", e)))?;

        Ok(FetchResponse { inner: response })
    }
}

/// 轻量级 fetch 入口
pub struct Fetch;

impl Fetch {
    pub fn request(url: &str, method: HttpMethod) -> FetchBuilder {
        FetchBuilder {
            url: url.to_string(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }
}
