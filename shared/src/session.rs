//! 会话视图投影
//!
//! 会话状态完全由服务端决定；这里只根据最后一次返回的会话推导界面需要的东西：
//! 可用的操作、显示用的计时、编辑对话框的初始勾选。

use crate::date;
use crate::{SessionStatus, StudyPlan, StudySession};

/// 会话页当前选中的计划
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlanSelection {
    /// "Show all"：显示用户的全部会话
    #[default]
    All,
    Plan(String),
}

impl PlanSelection {
    /// 从 `<select>` 的值解析，空字符串表示 "Show all"
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            PlanSelection::All
        } else {
            PlanSelection::Plan(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            PlanSelection::All => "",
            PlanSelection::Plan(id) => id,
        }
    }

    pub fn plan_id(&self) -> Option<&str> {
        match self {
            PlanSelection::All => None,
            PlanSelection::Plan(id) => Some(id),
        }
    }

    /// 在已加载的计划列表中找到对应计划
    pub fn resolve<'a>(&self, plans: &'a [StudyPlan]) -> Option<&'a StudyPlan> {
        let id = self.plan_id()?;
        plans.iter().find(|plan| plan.id == id)
    }
}

/// 活动会话面板上的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    End,
    Pause,
    Resume,
    Edit,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::End => "End",
            SessionAction::Pause => "Pause",
            SessionAction::Resume => "Resume",
            SessionAction::Edit => "Edit",
        }
    }
}

impl SessionStatus {
    /// 当前状态下允许的操作，顺序即按钮顺序
    pub fn available_actions(&self) -> &'static [SessionAction] {
        match self {
            SessionStatus::Active => &[SessionAction::End, SessionAction::Pause, SessionAction::Edit],
            SessionStatus::Paused => &[SessionAction::End, SessionAction::Resume, SessionAction::Edit],
            SessionStatus::Completed => &[],
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SessionStatus::Active => "badge-success",
            SessionStatus::Paused => "badge-warning",
            SessionStatus::Completed => "badge-ghost",
        }
    }
}

/// 会话的有效学习时长（秒），仅用于显示
///
/// 终点取决于状态：进行中用 `now_millis`，暂停中用 `last_pause_time`，
/// 已结束用 `ended_at`；再减去累计暂停时长。时间无法解析时返回 0。
pub fn elapsed_seconds(session: &StudySession, now_millis: i64) -> i64 {
    let Some(started) = date::parse_millis(&session.started_at) else {
        return 0;
    };

    let end = match session.status {
        SessionStatus::Active => Some(now_millis),
        SessionStatus::Paused => session
            .last_pause_time
            .as_deref()
            .and_then(date::parse_millis)
            .or(Some(now_millis)),
        SessionStatus::Completed => session.ended_at.as_deref().and_then(date::parse_millis),
    };

    let Some(end) = end else {
        return session.study_time.map(|s| s as i64).unwrap_or(0);
    };

    let paused_ms = (session.total_pause_time.max(0.0) * 1000.0) as i64;
    ((end - started - paused_ms) / 1000).max(0)
}

/// 会话中已完成主题的 id，用作编辑对话框的初始勾选
pub fn completed_topic_ids(session: &StudySession) -> Vec<String> {
    session
        .topics
        .iter()
        .filter(|topic| topic.is_completed())
        .map(|topic| topic.id().to_string())
        .collect()
}

/// 勾选/取消勾选一个主题
pub fn toggle_topic(selected: &mut Vec<String>, topic_id: &str) {
    if let Some(pos) = selected.iter().position(|id| id == topic_id) {
        selected.remove(pos);
    } else {
        selected.push(topic_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SessionPlanRef, SessionTopic, StudyPlanTopic};

    fn millis(value: &str) -> i64 {
        date::parse_millis(value).unwrap()
    }

    fn session(status: SessionStatus) -> StudySession {
        StudySession {
            id: "s1".into(),
            title: "Review".into(),
            description: "ch1-3".into(),
            notes: None,
            topics: vec![],
            plan: SessionPlanRef {
                id: "p1".into(),
                title: "Calculus".into(),
            },
            started_at: "2024-10-01T09:00:00".into(),
            ended_at: None,
            last_pause_time: None,
            total_pause_time: 0.0,
            status,
            study_time: None,
        }
    }

    fn topic(id: &str, completed: bool) -> SessionTopic {
        SessionTopic::Detailed(StudyPlanTopic {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            completed_at: completed.then(|| "2024-10-01T10:00:00".to_string()),
            created_at: String::new(),
        })
    }

    #[test]
    fn test_actions_follow_status() {
        assert_eq!(
            SessionStatus::Active.available_actions(),
            &[SessionAction::End, SessionAction::Pause, SessionAction::Edit]
        );
        assert!(SessionStatus::Paused.available_actions().contains(&SessionAction::Resume));
        assert!(!SessionStatus::Paused.available_actions().contains(&SessionAction::Pause));
        assert!(SessionStatus::Completed.available_actions().is_empty());
    }

    #[test]
    fn test_elapsed_for_active_session_subtracts_pauses() {
        let mut s = session(SessionStatus::Active);
        s.total_pause_time = 600.0;
        let now = millis("2024-10-01T10:00:00");
        assert_eq!(elapsed_seconds(&s, now), 3000);
    }

    #[test]
    fn test_elapsed_freezes_while_paused() {
        let mut s = session(SessionStatus::Paused);
        s.last_pause_time = Some("2024-10-01T09:30:00".into());
        let later = millis("2024-10-01T12:00:00");
        assert_eq!(elapsed_seconds(&s, later), 1800);
    }

    #[test]
    fn test_elapsed_for_completed_uses_end_time() {
        let mut s = session(SessionStatus::Completed);
        s.ended_at = Some("2024-10-01T09:45:00".into());
        assert_eq!(elapsed_seconds(&s, 0), 2700);

        s.ended_at = None;
        s.study_time = Some(120.0);
        assert_eq!(elapsed_seconds(&s, 0), 120);
    }

    #[test]
    fn test_elapsed_never_negative() {
        let s = session(SessionStatus::Active);
        assert_eq!(elapsed_seconds(&s, millis("2024-10-01T08:00:00")), 0);

        let mut bad = session(SessionStatus::Active);
        bad.started_at = "garbage".into();
        assert_eq!(elapsed_seconds(&bad, 0), 0);
    }

    #[test]
    fn test_completed_topics_preselected() {
        let mut s = session(SessionStatus::Active);
        s.topics = vec![topic("t1", true), topic("t2", false), SessionTopic::Id("t3".into())];
        assert_eq!(completed_topic_ids(&s), vec!["t1".to_string()]);
    }

    #[test]
    fn test_toggle_topic() {
        let mut selected = vec!["t1".to_string()];
        toggle_topic(&mut selected, "t2");
        assert_eq!(selected, ["t1", "t2"]);
        toggle_topic(&mut selected, "t1");
        assert_eq!(selected, ["t2"]);
    }

    #[test]
    fn test_plan_selection_values() {
        assert_eq!(PlanSelection::from_value(""), PlanSelection::All);
        let sel = PlanSelection::from_value("p1");
        assert_eq!(sel.plan_id(), Some("p1"));
        assert_eq!(sel.as_value(), "p1");
        assert!(sel.resolve(&[]).is_none());
    }
}
