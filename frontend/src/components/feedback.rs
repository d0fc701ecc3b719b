//! 错误与通知的展示组件

use leptos::prelude::*;

use crate::components::icons::{AlertCircle, RefreshCw};

/// 通知：消息内容与是否出错
pub type Notification = Option<(String, bool)>;

/// 表单或卡片内的行内错误
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div role="alert" class="alert alert-error text-sm py-2">
                <AlertCircle attr:class="h-5 w-5 shrink-0" />
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 页面初始加载失败时的横幅，带重试按钮
#[component]
pub fn LoadErrorBanner(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some())>
            <div role="alert" class="alert alert-warning shadow">
                <AlertCircle attr:class="h-6 w-6 shrink-0" />
                <div>
                    <h3 class="font-bold">"Could not load data"</h3>
                    <div class="text-sm">{move || error.get().unwrap_or_default()}</div>
                </div>
                <button class="btn btn-sm gap-2" on:click=move |_| on_retry.run(())>
                    <RefreshCw attr:class="h-4 w-4" />
                    "Retry"
                </button>
            </div>
        </Show>
    }
}

/// 右上角的提示，3 秒后自动消失
#[component]
pub fn Toast(notification: RwSignal<Notification>) -> impl IntoView {
    let counter = StoredValue::new(DismissCounter::default());
    Effect::new(move |_| {
        if notification.with(|n| n.is_some()) {
            let ticket = counter.try_update_value(DismissCounter::issue).unwrap_or_default();
            set_timeout(
                move || {
                    // 之后又弹出了新提示，则交给新提示自己的计时器
                    if counter.with_value(|c| c.is_current(ticket)) {
                        notification.set(None);
                    }
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.with(|n| n.is_some())>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notification.with(|n| n.as_ref().map(|(_, e)| *e).unwrap_or(false));
                    if is_err { "alert alert-error shadow-lg" } else { "alert alert-success shadow-lg" }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

/// 列表为空或正在加载时的占位
#[component]
pub fn EmptyState(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        {move || if loading.get() {
            view! {
                <div class="col-span-full text-center py-8 text-base-content/50">
                    <span class="loading loading-spinner loading-md"></span>
                    " Loading..."
                </div>
            }.into_any()
        } else {
            view! {
                <div class="col-span-full text-center py-8 text-base-content/50">{message.clone()}</div>
            }.into_any()
        }}
    }
}

/// 提示自动消失的计时票据
///
/// 每次弹出提示签发一张新票据，只有最新票据对应的计时器才会清除提示。
#[derive(Debug, Default, Clone, Copy)]
struct DismissCounter {
    latest: u64,
}

impl DismissCounter {
    fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_toast_invalidates_earlier_timer() {
        let mut counter = DismissCounter::default();
        let first = counter.issue();
        assert!(counter.is_current(first));

        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn test_tickets_are_distinct() {
        let mut counter = DismissCounter::default();
        let tickets: Vec<u64> = (0..3).map(|_| counter.issue()).collect();
        assert_eq!(tickets, vec![1, 2, 3]);
    }
}
