//! 学习计划表单状态
//!
//! 手动创建与 AI 生成各用一个结构体，字段都是 `RwSignal`，可以直接作为 Props 传递。

use leptos::prelude::*;
use studere_shared::{StudyPlanAiRequest, StudyPlanManualRequest, TopicDraft};

/// 手动创建计划的表单
#[derive(Clone, Copy)]
pub struct ManualPlanForm {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub course_id: RwSignal<String>,
    pub topics: RwSignal<Vec<TopicDraft>>,
}

impl ManualPlanForm {
    /// 新表单自带一个空主题行
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            course_id: RwSignal::new(String::new()),
            topics: RwSignal::new(vec![TopicDraft::default()]),
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.course_id.set(String::new());
        self.topics.set(vec![TopicDraft::default()]);
    }

    pub fn add_topic(&self) {
        self.topics.update(|topics| topics.push(TopicDraft::default()));
    }

    pub fn remove_topic(&self, index: usize) {
        self.topics.update(|topics| {
            if index < topics.len() {
                topics.remove(index);
            }
        });
    }

    pub fn set_topic_title(&self, index: usize, value: String) {
        self.topics.update(|topics| {
            if let Some(topic) = topics.get_mut(index) {
                topic.title = value;
            }
        });
    }

    pub fn set_topic_description(&self, index: usize, value: String) {
        self.topics.update(|topics| {
            if let Some(topic) = topics.get_mut(index) {
                topic.description = value;
            }
        });
    }

    /// 完全空白的主题行不提交
    pub fn to_request(&self) -> StudyPlanManualRequest {
        let topics = self
            .topics
            .get_untracked()
            .into_iter()
            .map(|topic| TopicDraft {
                title: topic.title.trim().to_string(),
                description: topic.description.trim().to_string(),
            })
            .filter(|topic| !(topic.title.is_empty() && topic.description.is_empty()))
            .collect();

        StudyPlanManualRequest {
            title: self.title.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            course_id: self.course_id.get_untracked(),
            topics,
        }
    }
}

impl Default for ManualPlanForm {
    fn default() -> Self {
        Self::new()
    }
}

/// AI 生成计划的表单
#[derive(Clone, Copy)]
pub struct AiPlanForm {
    pub prompt: RwSignal<String>,
    pub course_id: RwSignal<String>,
}

impl AiPlanForm {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(String::new()),
            course_id: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.prompt.set(String::new());
        self.course_id.set(String::new());
    }

    pub fn to_request(&self) -> StudyPlanAiRequest {
        StudyPlanAiRequest {
            prompt: self.prompt.get_untracked().trim().to_string(),
            course_id: self.course_id.get_untracked(),
        }
    }
}

impl Default for AiPlanForm {
    fn default() -> Self {
        Self::new()
    }
}
