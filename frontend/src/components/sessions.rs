//! 学习会话页
//!
//! 选中某个计划时显示它的当前会话与历史；选择 "Show all" 时只显示全部历史。
//! 会话状态以服务端返回为准，每次操作后直接替换本地副本。

use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::session::PlanSelection;
use studere_shared::{StudyPlan, StudySession};
use tracing::{debug, error};

use crate::api::use_api;
use crate::components::feedback::{LoadErrorBanner, Notification, Toast};
use crate::components::icons::Play;
use crate::components::layout::{BaseLayout, PageHeader};
use crate::components::list_state::ListState;

mod active_session;
mod edit_session_dialog;
mod history_table;
mod start_session_dialog;

use active_session::ActiveSession;
use history_table::HistoryTable;
use start_session_dialog::StartSessionDialog;

#[component]
pub fn SessionsPage() -> impl IntoView {
    let api = use_api();
    let plans = ListState::<StudyPlan>::new();
    let notification = RwSignal::new(Notification::None);

    let selection = RwSignal::new(PlanSelection::All);
    let current = RwSignal::new(None::<StudySession>);
    let history = RwSignal::new(Vec::<StudySession>::new());
    let history_loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);

    let load_plans = move || {
        let client = api.client();
        plans.load("study plans", async move { client.list_plans().await });
    };
    load_plans();

    // 按当前选择加载会话；切换选择后才返回的旧结果直接丢弃
    let load_sessions = move |target: PlanSelection| {
        let client = api.client();
        history_loading.set(true);
        spawn_local(async move {
            let result = match target.plan_id() {
                Some(plan_id) => match client.current_session(plan_id).await {
                    Ok(active) => client.session_history(plan_id).await.map(|list| (active, list)),
                    Err(e) => Err(e),
                },
                None => client.user_sessions().await.map(|list| (None, list)),
            };

            if selection.get_untracked() != target {
                debug!(selection = target.as_value(), "discarding stale session response");
                return;
            }

            match result {
                Ok((active, list)) => {
                    current.set(active);
                    history.set(list);
                    load_error.set(None);
                }
                Err(e) => {
                    error!(selection = target.as_value(), error = %e, "failed to load sessions");
                    load_error.set(Some(e.user_message()));
                }
            }
            history_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let target = selection.get();
        current.set(None);
        history.set(Vec::new());
        load_sessions(target);
    });

    let reload = move || {
        load_error.set(None);
        if plans.load_error.get_untracked().is_some() {
            load_plans();
        }
        load_sessions(selection.get_untracked());
    };

    let page_error = Signal::derive(move || load_error.get().or_else(|| plans.load_error.get()));

    let start_open = RwSignal::new(false);
    let can_start = move || selection.with(|s| s.plan_id().is_some()) && current.with(|c| c.is_none());

    let on_started = Callback::new(move |session: StudySession| {
        notification.set(Some((format!("Session \"{}\" started", session.title), false)));
        current.set(Some(session));
    });

    let on_ended = Callback::new(move |session: StudySession| {
        notification.set(Some((format!("Session \"{}\" ended", session.title), false)));
        current.set(None);
        load_sessions(selection.get_untracked());
    });

    view! {
        <BaseLayout>
            <Toast notification=notification />
            <PageHeader title="Study Sessions">
                <div class="flex flex-wrap gap-2 items-center">
                    <select
                        class="select select-bordered"
                        on:change=move |ev| selection.set(PlanSelection::from_value(&event_target_value(&ev)))
                        prop:value=move || selection.with(|s| s.as_value().to_string())
                    >
                        <option value="">"Show all"</option>
                        <For
                            each=move || plans.items.get()
                            key=|plan| plan.id.clone()
                            children=move |plan| {
                                let id = plan.id.clone();
                                view! {
                                    <option
                                        value=plan.id
                                        selected=move || selection.with(|s| s.plan_id() == Some(id.as_str()))
                                    >
                                        {plan.title}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <button
                        class="btn btn-primary gap-2"
                        disabled=move || !can_start()
                        on:click=move |_| start_open.set(true)
                    >
                        <Play attr:class="h-4 w-4" />
                        "Start Session"
                    </button>
                </div>
            </PageHeader>
            <LoadErrorBanner error=page_error on_retry=move |_| reload() />

            <Show when=move || current.with(|c| c.is_some())>
                <ActiveSession
                    current=current
                    plans=plans.items
                    notification=notification
                    on_ended=on_ended
                />
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">
                        {move || match selection.get().resolve(&plans.items.get()) {
                            Some(plan) => format!("History: {}", plan.title),
                            None => "All sessions".to_string(),
                        }}
                    </h2>
                    <HistoryTable sessions=history loading=history_loading />
                </div>
            </div>

            <StartSessionDialog
                open=start_open
                plan_id=Signal::derive(move || selection.with(|s| s.plan_id().map(str::to_string)))
                on_started=on_started
            />
        </BaseLayout>
    }
}
