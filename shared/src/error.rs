use thiserror::Error;

/// API 调用的错误分类
///
/// - `Network`: 请求未能到达后端
/// - `Status`: 后端返回了非 2xx 状态
/// - `TokenExpired`: 后端声明 Token 已过期（客户端已清除 Token）
/// - `Decode` / `Encode`: JSON 编解码失败
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {}: {}", .status, .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("session expired, please log in again")]
    TokenExpired,

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::TokenExpired => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// 面向用户的简短描述，用于内联错误提示
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { status, .. } => format!("The server rejected the request ({status})."),
            ApiError::TokenExpired => "Your session has expired. Please log in again.".to_string(),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "Unexpected response from the server.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Term name already used".into()),
        };
        assert_eq!(err.user_message(), "Term name already used");

        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn test_display_and_status() {
        let err = ApiError::Status {
            status: 404,
            detail: None,
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "request failed with status 404: no detail");
        assert_eq!(ApiError::TokenExpired.status(), Some(401));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
