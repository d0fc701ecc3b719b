//! 浏览器 localStorage 访问
//!
//! 登录 Token 固定保存在 `token` 键下，这里是唯一读写该键的地方；
//! 其他键（例如 API 地址覆盖值）通过 [`LocalStorage::get`] 读取。

use studere_shared::TOKEN_STORAGE_KEY;

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取任意键；存储不可用时为 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 当前保存的 Token，空串视为未登录
    pub fn token() -> Option<String> {
        non_empty(Self::get(TOKEN_STORAGE_KEY))
    }

    pub fn set_token(token: &str) {
        if let Some(storage) = Self::storage()
            && storage.set_item(TOKEN_STORAGE_KEY, token).is_err()
        {
            tracing::warn!("failed to persist token to localStorage");
        }
    }

    pub fn clear_token() {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_counts_as_logged_out() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
    }

    #[test]
    fn test_stored_token_is_returned_unchanged() {
        assert_eq!(non_empty(Some("abc.def".to_string())), Some("abc.def".to_string()));
    }
}
