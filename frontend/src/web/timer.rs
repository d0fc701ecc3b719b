//! 定时器封装模块
//!
//! 会话计时器每秒刷新一次显示，组件卸载时随 `Interval` 一起清除。

use wasm_bindgen::prelude::*;

/// 周期性定时器
///
/// 封装 `setInterval`。当 `Interval` 被 drop 时自动清除。
pub struct Interval {
    handle: Option<i32>,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// 创建新的周期性定时器
    ///
    /// 无法注册时（没有 window）返回一个不会触发的定时器，并记录警告。
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::<dyn Fn()>::new(callback);

        let handle = web_sys::window().and_then(|window| {
            window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    millis as i32,
                )
                .ok()
        });

        if handle.is_none() {
            tracing::warn!(millis, "failed to register interval");
        }

        Self { handle, closure }
    }

    /// 取消定时器
    pub fn cancel(&self) {
        if let (Some(window), Some(handle)) = (web_sys::window(), self.handle) {
            window.clear_interval_with_handle(handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// 浏览器当前时间（Unix 毫秒）
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}
