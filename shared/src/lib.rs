//! Studere 共享核心
//!
//! 与平台无关的部分都在这里：领域模型、请求协议、带认证的 API 客户端、
//! 列表状态合并、图表计算与会话投影。前端只负责把它们接到浏览器 API 上。

use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod api;
pub mod chart;
pub mod client;
pub mod collection;
pub mod date;
pub mod error;
pub mod protocol;
pub mod request;
pub mod session;
pub mod validation;

pub use client::{ApiClient, MemoryTokenStore, TokenStore};
pub use collection::Identified;
pub use error::{ApiError, ApiResult};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端默认地址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// LocalStorage 中保存 Bearer Token 的键
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
/// 后端在 Token 过期时返回的 `detail` 字段内容
pub const TOKEN_EXPIRED_DETAIL: &str = "Token expirado";

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// =========================================================
// 学期 / 课程 / 作业 (Terms, Courses, Assignments)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TermRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
}

impl From<&Term> for TermRequest {
    fn from(term: &Term) -> Self {
        Self {
            name: term.name.clone(),
            start_date: crate::date::to_date_input(&term.start_date),
            end_date: crate::date::to_date_input(&term.end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub term_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Select a term"))]
    pub term_id: String,
}

impl From<&Course> for CourseRequest {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            term_id: course.term_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Exam,
    #[default]
    Project,
}

impl AssignmentType {
    pub const ALL: [AssignmentType; 2] = [AssignmentType::Exam, AssignmentType::Project];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::Exam => "exam",
            AssignmentType::Project => "project",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentType::Exam => "Exam",
            AssignmentType::Project => "Project",
        }
    }

    /// 从 `<select>` 的值解析，未知值回落到默认类型
    pub fn from_value(value: &str) -> Self {
        match value {
            "exam" => AssignmentType::Exam,
            _ => AssignmentType::Project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_at: String,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub course_id: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AssignmentRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Due date is required"))]
    pub due_at: String,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    #[validate(length(min = 1, message = "Select a course"))]
    pub course_id: String,
}

impl From<&Assignment> for AssignmentRequest {
    fn from(a: &Assignment) -> Self {
        Self {
            title: a.title.clone(),
            description: a.description.clone(),
            due_at: crate::date::to_datetime_input(&a.due_at),
            kind: a.kind,
            course_id: a.course_id.clone(),
        }
    }
}

// =========================================================
// 学习计划 (Study Plans)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanTopic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl StudyPlanTopic {
    /// `completed_at` 为空即未完成
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub id: String,
    pub title: String,
    pub course_id: String,
    #[serde(default)]
    pub topics: Vec<StudyPlanTopic>,
    #[serde(default)]
    pub created_at: String,
}

impl StudyPlan {
    pub fn completed_topics(&self) -> usize {
        self.topics.iter().filter(|t| t.is_completed()).count()
    }
}

/// 手动创建计划时填写的主题
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TopicDraft {
    #[validate(length(min = 1, message = "Every topic needs a title"))]
    pub title: String,
    #[validate(length(min = 1, message = "Every topic needs a description"))]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudyPlanManualRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Select a course"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "Please add at least one topic"), nested)]
    pub topics: Vec<TopicDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudyPlanAiRequest {
    #[validate(length(min = 1, message = "Prompt is required"))]
    pub prompt: String,
    #[validate(length(min = 1, message = "Select a course"))]
    pub course_id: String,
}

// =========================================================
// 学习会话 (Study Sessions)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPlanRef {
    pub id: String,
    pub title: String,
}

/// 会话中的主题
///
/// 声明的类型是主题 id 列表，但后端在当前会话与历史记录中返回完整的主题对象，
/// 两种形状都接受。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionTopic {
    Detailed(StudyPlanTopic),
    Id(String),
}

impl SessionTopic {
    pub fn id(&self) -> &str {
        match self {
            SessionTopic::Detailed(topic) => &topic.id,
            SessionTopic::Id(id) => id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SessionTopic::Detailed(topic) => &topic.title,
            SessionTopic::Id(id) => id,
        }
    }

    /// 只有完整对象才携带完成状态；裸 id 视为未完成
    pub fn is_completed(&self) -> bool {
        match self {
            SessionTopic::Detailed(topic) => topic.is_completed(),
            SessionTopic::Id(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub topics: Vec<SessionTopic>,
    pub plan: SessionPlanRef,
    pub started_at: String,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub last_pause_time: Option<String>,
    /// 累计暂停时长（秒）
    #[serde(default)]
    pub total_pause_time: f64,
    pub status: SessionStatus,
    /// 有效学习时长（秒），仅历史记录中由后端计算
    #[serde(default)]
    pub study_time: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudySessionRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub plan_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySessionUpdateRequest {
    pub notes: String,
    /// 已完成主题的 id
    pub topics: Vec<String>,
}

// =========================================================
// 仪表盘 (Dashboard)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTime {
    pub course: String,
    /// 秒
    pub time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Streaks {
    pub streaks: Vec<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_type_wire_format() {
        let raw = json!({
            "id": "a1",
            "title": "Midterm",
            "description": "Chapters 1-4",
            "due_at": "2024-10-20T09:00:00",
            "type": "exam",
            "course_id": "c1",
            "score": 0,
            "created_at": "2024-09-01T00:00:00"
        });
        let a: Assignment = serde_json::from_value(raw).unwrap();
        assert_eq!(a.kind, AssignmentType::Exam);
        assert_eq!(a.score, Some(0.0));

        let req = AssignmentRequest::from(&a);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["type"], "exam");
        assert!(body.get("kind").is_none());
    }

    #[test]
    fn test_session_topics_accept_ids_and_objects() {
        let raw = json!({
            "id": "s1",
            "title": "Review",
            "description": "ch1-3",
            "notes": null,
            "topics": [
                "t-raw",
                { "id": "t1", "title": "Limits", "completed_at": "2024-10-01T10:00:00" }
            ],
            "plan": { "id": "p1", "title": "Calculus" },
            "started_at": "2024-10-01T09:00:00",
            "ended_at": null,
            "last_pause_time": null,
            "total_pause_time": 0,
            "status": "active"
        });
        let session: StudySession = serde_json::from_value(raw).unwrap();
        assert_eq!(session.status, SessionStatus::Active);
        assert_eq!(session.topics.len(), 2);
        assert_eq!(session.topics[0].id(), "t-raw");
        assert!(!session.topics[0].is_completed());
        assert_eq!(session.topics[1].title(), "Limits");
        assert!(session.topics[1].is_completed());
    }

    #[test]
    fn test_plan_completed_topics() {
        let plan: StudyPlan = serde_json::from_value(json!({
            "id": "p1",
            "title": "Calculus",
            "course_id": "c1",
            "topics": [
                { "id": "t1", "title": "Limits", "description": "", "completed_at": null, "created_at": "" },
                { "id": "t2", "title": "Series", "description": "", "completed_at": "2024-10-01", "created_at": "" }
            ],
            "created_at": "2024-09-01"
        }))
        .unwrap();
        assert_eq!(plan.completed_topics(), 1);
    }
}
