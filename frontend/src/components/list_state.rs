//! 页面列表状态
//!
//! 每个页面独占自己的列表：挂载时加载一次，之后只用增删改的返回结果更新，
//! 离开页面即丢弃。

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::collection::{self, Identified};
use studere_shared::{ApiError, ApiResult};
use tracing::error;

pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            load_error: RwSignal::new(None),
        }
    }

    /// 加载整个列表；失败时保留旧数据并记录错误供横幅显示
    pub fn load<Fut>(&self, resource: &'static str, fetch: Fut)
    where
        Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
    {
        let state = *self;
        state.loading.set(true);
        spawn_local(async move {
            match fetch.await {
                Ok(items) => {
                    state.items.set(items);
                    state.load_error.set(None);
                }
                Err(e) => state.fail(resource, &e),
            }
            state.loading.set(false);
        });
    }

    fn fail(&self, resource: &'static str, e: &ApiError) {
        error!(resource, error = %e, "failed to load list");
        self.load_error.set(Some(e.user_message()));
    }

    /// 创建或更新成功：已有同 id 则原位替换，否则追加
    pub fn upsert(&self, item: T) {
        self.items.update(|items| {
            collection::upsert(items, item);
        });
    }

    /// 删除成功
    pub fn remove(&self, id: &str) {
        self.items.update(|items| {
            collection::remove_by_id(items, id);
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }
}

impl<T> Default for ListState<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
