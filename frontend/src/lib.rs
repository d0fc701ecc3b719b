//! Studere 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `config` / `api`: 后端地址与 API 客户端的接线
//! - `components`: UI 组件层

mod api;
mod auth;
mod config;
mod components {
    pub mod assignments;
    pub mod courses;
    pub mod dashboard;
    mod feedback;
    mod icons;
    mod layout;
    mod list_state;
    pub mod login;
    mod modal;
    pub mod plans;
    pub mod sessions;
    pub mod terms;
}

use crate::api::Api;
use crate::auth::{AuthContext, init_auth};
use crate::components::assignments::AssignmentsPage;
use crate::components::courses::CoursesPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::plans::PlansPage;
use crate::components::sessions::SessionsPage;
use crate::components::terms::TermsPage;
use crate::config::AppConfig;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::Fetch;
    pub use storage::LocalStorage;
    pub use timer::{Interval, now_millis};
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Terms => view! { <TermsPage /> }.into_any(),
        AppRoute::Courses => view! { <CoursesPage /> }.into_any(),
        AppRoute::Assignments => view! { <AssignmentsPage /> }.into_any(),
        AppRoute::Plans => view! { <PlansPage /> }.into_any(),
        AppRoute::Sessions => view! { <SessionsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link route=AppRoute::Dashboard class="btn btn-primary mt-6">"Back to dashboard"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 加载 token）
    init_auth(&auth_ctx);

    // 3. 解析后端地址，提供 API 句柄
    let config = AppConfig::load();
    provide_context(Api::new(&config, auth_ctx));

    // 4. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
