//! 列表状态合并
//!
//! 页面在每次增删改成功后，直接用服务端返回的结果更新本地列表，而不是整页重新拉取。
//! 失败时列表保持不变。

use crate::{Assignment, Course, StudyPlan, StudySession, Term};

/// 拥有服务端 id 的实体
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_identified!(Term, Course, Assignment, StudyPlan, StudySession);

/// 创建成功：追加到末尾
pub fn append<T>(items: &mut Vec<T>, created: T) {
    items.push(created);
}

/// 更新成功：替换 id 相同的那一项，保持位置
///
/// 找不到时返回 `false`，列表不变。
pub fn replace_by_id<T: Identified>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// 保存成功（创建或更新）：已有同 id 则原位替换，否则追加
///
/// 返回是否发生了替换。
pub fn upsert<T: Identified>(items: &mut Vec<T>, saved: T) -> bool {
    match items.iter().position(|item| item.id() == saved.id()) {
        Some(index) => {
            items[index] = saved;
            true
        }
        None => {
            items.push(saved);
            false
        }
    }
}

/// 删除成功：移除该 id 的项
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// 按 id 查找
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: &str, name: &str) -> Term {
        Term {
            id: id.into(),
            name: name.into(),
            user_id: "u1".into(),
            start_date: "2024-09-01".into(),
            end_date: "2024-12-15".into(),
        }
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut terms = vec![term("t1", "Spring")];
        append(&mut terms, term("t2", "Fall"));
        let names: Vec<&str> = terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Spring", "Fall"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut terms = vec![term("t1", "Spring"), term("t2", "Fall"), term("t3", "Summer")];
        assert!(replace_by_id(&mut terms, term("t2", "Autumn")));
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[1].name, "Autumn");
        assert_eq!(terms[0].name, "Spring");
        assert_eq!(terms[2].name, "Summer");
    }

    #[test]
    fn test_update_of_unknown_id_is_noop() {
        let mut terms = vec![term("t1", "Spring")];
        assert!(!replace_by_id(&mut terms, term("t9", "Ghost")));
        assert_eq!(terms, vec![term("t1", "Spring")]);
    }

    #[test]
    fn test_save_of_new_id_appends_once() {
        let mut terms = vec![term("t1", "Spring")];
        assert!(!upsert(&mut terms, term("t2", "Fall")));
        assert_eq!(terms, vec![term("t1", "Spring"), term("t2", "Fall")]);
        assert_eq!(terms.iter().filter(|t| t.id == "t2").count(), 1);
    }

    #[test]
    fn test_save_of_existing_id_replaces_in_place() {
        let mut terms = vec![term("t1", "Spring"), term("t2", "Fall"), term("t3", "Summer")];
        assert!(upsert(&mut terms, term("t2", "Autumn")));
        assert_eq!(
            terms,
            vec![term("t1", "Spring"), term("t2", "Autumn"), term("t3", "Summer")]
        );
    }

    #[test]
    fn test_repeated_save_never_duplicates() {
        let mut terms = Vec::new();
        upsert(&mut terms, term("t1", "Spring"));
        upsert(&mut terms, term("t1", "Spring 2025"));
        assert_eq!(terms, vec![term("t1", "Spring 2025")]);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut terms = vec![term("t1", "Spring"), term("t2", "Fall")];
        assert!(remove_by_id(&mut terms, "t1"));
        assert_eq!(terms, vec![term("t2", "Fall")]);
        assert!(!remove_by_id(&mut terms, "t1"));
        assert!(find_by_id(&terms, "t2").is_some());
    }
}
