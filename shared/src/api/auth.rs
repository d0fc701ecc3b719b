use crate::client::{ApiClient, TokenStore};
use crate::error::ApiResult;
use crate::protocol::{ApiRequest, HttpMethod};
use crate::request::HttpClient;
use crate::{LoginRequest, LoginResponse, RegisterRequest};

impl ApiRequest for LoginRequest {
    type Body = Self;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/users/login/".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

impl ApiRequest for RegisterRequest {
    type Body = Self;
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/users/register".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    /// 用邮箱与密码换取 Bearer Token
    ///
    /// 只返回 Token，保存与否由认证上下文决定。
    pub async fn login(&self, req: &LoginRequest) -> ApiResult<LoginResponse> {
        self.send(req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> ApiResult<serde_json::Value> {
        self.send(req).await
    }
}
