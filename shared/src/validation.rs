//! 表单校验辅助
//!
//! 请求类型用 `validator` 声明规则，表单只显示第一条错误。

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// 取出第一条错误消息（按字段名排序，保证稳定）
///
/// 嵌套结构与列表中的错误也会被找到。
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        let found = match kind {
            ValidationErrorsKind::Field(list) => list.first().map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            }),
            ValidationErrorsKind::Struct(inner) => first_message(inner),
            ValidationErrorsKind::List(items) => items.values().find_map(|inner| first_message(inner)),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// 校验并转换为表单可显示的错误
pub fn check<T: Validate>(value: &T) -> Result<(), String> {
    value
        .validate()
        .map_err(|errors| first_message(&errors).unwrap_or_else(|| "Invalid input".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoginRequest, RegisterRequest, StudyPlanManualRequest, TermRequest, TopicDraft};

    #[test]
    fn test_valid_request_passes() {
        let req = TermRequest {
            name: "Fall".into(),
            start_date: "2024-09-01".into(),
            end_date: "2024-12-15".into(),
        };
        assert_eq!(check(&req), Ok(()));
    }

    #[test]
    fn test_missing_field_reports_message() {
        let req = LoginRequest {
            email: "a@b.com".into(),
            password: String::new(),
        };
        assert_eq!(check(&req), Err("Password is required".to_string()));
    }

    #[test]
    fn test_register_requires_email_shape() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        assert_eq!(check(&req), Err("Enter a valid email address".to_string()));
    }

    #[test]
    fn test_manual_plan_needs_a_topic() {
        let mut req = StudyPlanManualRequest {
            title: "Calculus".into(),
            description: "Midterm prep".into(),
            course_id: "c1".into(),
            topics: vec![],
        };
        assert_eq!(check(&req), Err("Please add at least one topic".to_string()));

        req.topics.push(TopicDraft {
            title: String::new(),
            description: "limits".into(),
        });
        assert_eq!(check(&req), Err("Every topic needs a title".to_string()));

        req.topics[0].title = "Limits".into();
        assert_eq!(check(&req), Ok(()));
    }
}
