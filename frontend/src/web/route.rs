//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录 / 注册页面
    Login,
    /// 仪表盘（首页）
    #[default]
    Dashboard,
    Terms,
    Courses,
    Assignments,
    Plans,
    Sessions,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 侧边导航中出现的路由，按显示顺序
    pub const MENU: [AppRoute; 6] = [
        AppRoute::Dashboard,
        AppRoute::Terms,
        AppRoute::Courses,
        AppRoute::Assignments,
        AppRoute::Plans,
        AppRoute::Sessions,
    ];

    /// 将 URL path 解析为路由枚举（忽略末尾的 `/`）
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            "/login" => Self::Login,
            "/terms" => Self::Terms,
            "/courses" => Self::Courses,
            "/assignments" => Self::Assignments,
            "/plans" => Self::Plans,
            "/sessions" => Self::Sessions,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Terms => "/terms",
            Self::Courses => "/courses",
            Self::Assignments => "/assignments",
            Self::Plans => "/plans",
            Self::Sessions => "/sessions",
            Self::NotFound => "/404",
        }
    }

    /// 导航菜单中的名称
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Terms => "Terms",
            Self::Courses => "Courses",
            Self::Assignments => "Assignments",
            Self::Plans => "Study Plans",
            Self::Sessions => "Study Sessions",
            Self::NotFound => "Not Found",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 守卫判定：返回需要重定向到的路由，`None` 表示放行
    pub fn guard(&self, is_authenticated: bool) -> Option<AppRoute> {
        if self.requires_auth() && !is_authenticated {
            Some(Self::auth_failure_redirect())
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Some(Self::auth_success_redirect())
        } else {
            None
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::MENU.into_iter().chain([AppRoute::Login]) {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/terms/"), AppRoute::Terms);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_protected_routes_redirect_to_login_without_token() {
        for route in AppRoute::MENU {
            assert_eq!(route.guard(false), Some(AppRoute::Login), "{route}");
            assert_eq!(route.guard(true), None, "{route}");
        }
    }

    #[test]
    fn test_login_redirects_when_authenticated() {
        assert_eq!(AppRoute::Login.guard(false), None);
        assert_eq!(AppRoute::Login.guard(true), Some(AppRoute::Dashboard));
    }

    #[test]
    fn test_not_found_is_public() {
        assert_eq!(AppRoute::NotFound.guard(false), None);
        assert_eq!(AppRoute::NotFound.guard(true), None);
    }
}
