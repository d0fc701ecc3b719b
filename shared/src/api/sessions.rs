//! 学习会话接口
//!
//! 会话状态机完全由后端维护，这里只负责触发动作并返回后端给出的最新会话。
//! 除 `start` 外，所有动作都以计划 id 定位当前会话。

use crate::client::{ApiClient, TokenStore};
use crate::error::{ApiError, ApiResult};
use crate::protocol::{ApiRequest, HttpMethod, id_request};
use crate::request::HttpClient;
use crate::{StudySession, StudySessionRequest, StudySessionUpdateRequest};

impl ApiRequest for StudySessionRequest {
    type Body = Self;
    type Response = StudySession;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/sessions/start".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

id_request!(CurrentSession, Get, Option<StudySession>, "/sessions/current/{}");
id_request!(EndSession, Post, StudySession, "/sessions/end/{}");
id_request!(PauseSession, Post, StudySession, "/sessions/pause/{}");
id_request!(UnpauseSession, Post, StudySession, "/sessions/unpause/{}");
id_request!(SessionHistory, Get, Vec<StudySession>, "/sessions/history/{}");

/// 当前用户跨计划的全部会话
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSessions;

impl ApiRequest for UserSessions {
    type Body = ();
    type Response = Vec<StudySession>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/sessions/".to_string()
    }
}

/// PATCH /sessions/by-plan/{plan_id}
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSession {
    pub plan_id: String,
    pub data: StudySessionUpdateRequest,
}

impl ApiRequest for UpdateSession {
    type Body = StudySessionUpdateRequest;
    type Response = StudySession;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("/sessions/by-plan/{}", self.plan_id)
    }

    fn body(&self) -> Option<&StudySessionUpdateRequest> {
        Some(&self.data)
    }
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub async fn start_session(&self, req: &StudySessionRequest) -> ApiResult<StudySession> {
        self.send(req).await
    }

    /// 计划当前的会话；后端以 404 或 `null` 表示没有进行中的会话
    pub async fn current_session(&self, plan_id: &str) -> ApiResult<Option<StudySession>> {
        match self.send(&CurrentSession { id: plan_id.to_string() }).await {
            Ok(session) => Ok(session),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn end_session(&self, plan_id: &str) -> ApiResult<StudySession> {
        self.send(&EndSession { id: plan_id.to_string() }).await
    }

    pub async fn pause_session(&self, plan_id: &str) -> ApiResult<StudySession> {
        self.send(&PauseSession { id: plan_id.to_string() }).await
    }

    pub async fn unpause_session(&self, plan_id: &str) -> ApiResult<StudySession> {
        self.send(&UnpauseSession { id: plan_id.to_string() }).await
    }

    pub async fn session_history(&self, plan_id: &str) -> ApiResult<Vec<StudySession>> {
        self.send(&SessionHistory { id: plan_id.to_string() }).await
    }

    pub async fn user_sessions(&self) -> ApiResult<Vec<StudySession>> {
        self.send(&UserSessions).await
    }

    pub async fn update_session(
        &self,
        plan_id: &str,
        data: StudySessionUpdateRequest,
    ) -> ApiResult<StudySession> {
        self.send(&UpdateSession {
            plan_id: plan_id.to_string(),
            data,
        })
        .await
    }
}
