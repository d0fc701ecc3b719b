//! 进行中 / 暂停中的会话面板

use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::session::{self, SessionAction};
use studere_shared::{StudyPlan, StudySession, date};
use tracing::{info, warn};

use super::edit_session_dialog::EditSessionDialog;
use crate::api::use_api;
use crate::components::feedback::{ErrorAlert, Notification};
use crate::components::icons::{Check, Pause, Pencil, Play, Square, Timer};
use crate::web::{Interval, now_millis};

fn action_icon(action: SessionAction) -> AnyView {
    match action {
        SessionAction::End => view! { <Square attr:class="h-4 w-4" /> }.into_any(),
        SessionAction::Pause => view! { <Pause attr:class="h-4 w-4" /> }.into_any(),
        SessionAction::Resume => view! { <Play attr:class="h-4 w-4" /> }.into_any(),
        SessionAction::Edit => view! { <Pencil attr:class="h-4 w-4" /> }.into_any(),
    }
}

fn action_class(action: SessionAction) -> &'static str {
    match action {
        SessionAction::End => "btn btn-error btn-sm gap-1",
        SessionAction::Pause => "btn btn-warning btn-sm gap-1",
        SessionAction::Resume => "btn btn-success btn-sm gap-1",
        SessionAction::Edit => "btn btn-ghost btn-sm gap-1",
    }
}

/// 只在 `current` 为 Some 时渲染
#[component]
pub fn ActiveSession(
    current: RwSignal<Option<StudySession>>,
    plans: RwSignal<Vec<StudyPlan>>,
    notification: RwSignal<Notification>,
    #[prop(into)] on_ended: Callback<StudySession>,
) -> impl IntoView {
    let api = use_api();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let edit_open = RwSignal::new(false);

    // 每秒刷新一次显示用的时钟，面板卸载时定时器随之清除
    let now = RwSignal::new(now_millis());
    let _ticker = StoredValue::new_local(Interval::new(1000, move || now.set(now_millis())));

    let elapsed = move || {
        current.with(|s| {
            s.as_ref()
                .map(|s| date::format_elapsed(session::elapsed_seconds(s, now.get())))
                .unwrap_or_default()
        })
    };

    let run_action = move |action: SessionAction| {
        if action == SessionAction::Edit {
            edit_open.set(true);
            return;
        }
        let Some(plan_id) = current.with_untracked(|s| s.as_ref().map(|s| s.plan.id.clone())) else {
            return;
        };

        busy.set(true);
        error.set(None);
        let client = api.client();
        spawn_local(async move {
            let result = match action {
                SessionAction::End => client.end_session(&plan_id).await,
                SessionAction::Pause => client.pause_session(&plan_id).await,
                _ => client.unpause_session(&plan_id).await,
            };
            match result {
                Ok(updated) if action == SessionAction::End => {
                    info!(%plan_id, "study session ended");
                    on_ended.run(updated);
                }
                Ok(updated) => {
                    info!(%plan_id, status = updated.status.as_str(), "study session updated");
                    current.set(Some(updated));
                }
                Err(e) => {
                    warn!(%plan_id, action = action.label(), error = %e, "session action failed");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    let on_saved = Callback::new(move |updated: StudySession| {
        notification.set(Some(("Session updated".to_string(), false)));
        current.set(Some(updated));
    });

    view! {
        <div class="card bg-base-100 shadow-xl border-l-4 border-primary">
            <div class="card-body">
                <div class="flex flex-wrap items-start justify-between gap-4">
                    <div>
                        <h2 class="card-title">
                            {move || current.with(|s| s.as_ref().map(|s| s.title.clone()).unwrap_or_default())}
                            <span class=move || {
                                let class = current.with(|s| s.as_ref().map(|s| s.status.badge_class()).unwrap_or_default());
                                format!("badge {}", class)
                            }>
                                {move || current.with(|s| s.as_ref().map(|s| s.status.as_str()).unwrap_or_default())}
                            </span>
                        </h2>
                        <p class="text-sm text-base-content/70">
                            {move || current.with(|s| s.as_ref().map(|s| s.description.clone()).unwrap_or_default())}
                        </p>
                        <p class="text-xs text-base-content/50">
                            "Plan: " {move || current.with(|s| s.as_ref().map(|s| s.plan.title.clone()).unwrap_or_default())}
                            " · Started " {move || current.with(|s| s.as_ref().map(|s| date::format_datetime(&s.started_at)).unwrap_or_default())}
                        </p>
                    </div>
                    <div class="flex items-center gap-2 font-mono text-3xl">
                        <Timer attr:class="h-7 w-7 text-primary" />
                        {elapsed}
                    </div>
                </div>

                <ErrorAlert message=error />

                <div class="grid md:grid-cols-2 gap-4 mt-2">
                    <div>
                        <h3 class="font-semibold mb-1">"Notes"</h3>
                        <p class="whitespace-pre-wrap text-sm">
                            {move || current.with(|s| {
                                s.as_ref()
                                    .and_then(|s| s.notes.clone())
                                    .filter(|n| !n.is_empty())
                                    .unwrap_or_else(|| "No notes yet.".to_string())
                            })}
                        </p>
                    </div>
                    <div>
                        <h3 class="font-semibold mb-1">"Topics"</h3>
                        <ul class="space-y-1 text-sm">
                            {move || current.with(|s| {
                                s.as_ref()
                                    .map(|s| s.topics.clone())
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|topic| {
                                        let done = topic.is_completed();
                                        view! {
                                            <li class="flex items-center gap-2">
                                                <span class=if done { "text-success" } else { "text-base-content/30" }>
                                                    <Check attr:class="h-4 w-4" />
                                                </span>
                                                <span>{topic.title().to_string()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </ul>
                    </div>
                </div>

                <div class="card-actions justify-end mt-4">
                    {move || {
                        let actions = current.with(|s| {
                            s.as_ref().map(|s| s.status.available_actions()).unwrap_or_default()
                        });
                        actions
                            .iter()
                            .copied()
                            .map(|action| view! {
                                <button
                                    class=action_class(action)
                                    disabled=move || busy.get()
                                    on:click=move |_| run_action(action)
                                >
                                    {action_icon(action)}
                                    {action.label()}
                                </button>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            <EditSessionDialog open=edit_open current=current plans=plans on_saved=on_saved />
        </div>
    }
}
