//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态，登录、登出与 Token 过期后的跳转都由它完成。

use leptos::prelude::*;
use studere_shared::{ApiResult, LoginRequest, RegisterRequest, TokenStore};
use tracing::info;

use crate::api::StudereApi;
use crate::web::LocalStorage;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// Bearer Token；存在即视为已认证
    pub token: Option<String>,
    /// 上一次会话是否因 Token 过期而结束（登录页据此给出提示）
    pub session_expired: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.token.is_some()))
    }

    /// 后端声明 Token 过期：Token 已由客户端清除，这里只更新内存状态
    pub fn expire(&self) {
        info!("session expired");
        self.set_state.update(|state| {
            state.token = None;
            state.session_expired = true;
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 LocalStorage 恢复 Token
pub fn init_auth(ctx: &AuthContext) {
    let token = LocalStorage::token();
    info!(restored = token.is_some(), "auth initialized");
    ctx.set_state.update(|state| state.token = token);
}

/// 登录并保存 Token
///
/// 失败时状态不变，错误交给登录表单显示。
pub async fn login(ctx: &AuthContext, client: &StudereApi, req: LoginRequest) -> ApiResult<()> {
    let resp = client.login(&req).await?;

    client.tokens().set(&resp.access_token);
    ctx.set_state.update(|state| {
        state.token = Some(resp.access_token);
        state.session_expired = false;
    });
    info!("logged in");
    Ok(())
}

/// 注册新用户；不会自动登录
pub async fn register(client: &StudereApi, req: RegisterRequest) -> ApiResult<()> {
    client.register(&req).await?;
    info!("registered new account");
    Ok(())
}

/// 注销并清除 Token
///
/// 不需要手动导航，路由服务会监听认证状态变化并自动重定向到登录页。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::clear_token();
    ctx.set_state.update(|state| {
        state.token = None;
        state.session_expired = false;
    });
    info!("logged out");
}
