use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::session::{self, PlanSelection};
use studere_shared::{StudyPlan, StudySession, StudySessionUpdateRequest};
use tracing::warn;

use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::modal::Modal;

/// 勾选清单的一项：主题 id 与标题
type TopicOption = (String, String);

/// 清单来自会话所属计划的全部主题；计划尚未加载时退回会话自带的主题
fn topic_options(session: &StudySession, plans: &[StudyPlan]) -> Vec<TopicOption> {
    match PlanSelection::Plan(session.plan.id.clone()).resolve(plans) {
        Some(plan) => plan
            .topics
            .iter()
            .map(|topic| (topic.id.clone(), topic.title.clone()))
            .collect(),
        None => session
            .topics
            .iter()
            .map(|topic| (topic.id().to_string(), topic.title().to_string()))
            .collect(),
    }
}

#[component]
pub fn EditSessionDialog(
    open: RwSignal<bool>,
    current: RwSignal<Option<StudySession>>,
    plans: RwSignal<Vec<StudyPlan>>,
    #[prop(into)] on_saved: Callback<StudySession>,
) -> impl IntoView {
    let api = use_api();
    let notes = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<String>::new());
    let options = RwSignal::new(Vec::<TopicOption>::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // 打开时用会话当前内容预填
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        error.set(None);
        current.with_untracked(|s| {
            if let Some(s) = s {
                notes.set(s.notes.clone().unwrap_or_default());
                selected.set(session::completed_topic_ids(s));
                options.set(plans.with_untracked(|p| topic_options(s, p)));
            }
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(plan_id) = current.with_untracked(|s| s.as_ref().map(|s| s.plan.id.clone())) else {
            return;
        };
        let req = StudySessionUpdateRequest {
            notes: notes.get_untracked(),
            topics: selected.get_untracked(),
        };

        submitting.set(true);
        error.set(None);
        let client = api.client();
        spawn_local(async move {
            // 更新后重新拉取当前会话，拿到带完成状态的主题
            let result = match client.update_session(&plan_id, req).await {
                Ok(updated) => client
                    .current_session(&plan_id)
                    .await
                    .map(|fresh| fresh.unwrap_or(updated)),
                Err(e) => Err(e),
            };
            match result {
                Ok(session) => {
                    on_saved.run(session);
                    open.set(false);
                }
                Err(e) => {
                    warn!(%plan_id, error = %e, "failed to update session");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Modal open=open title="Edit Session">
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=error />
                <div class="form-control">
                    <label for="session_notes" class="label">
                        <span class="label-text">"Notes"</span>
                    </label>
                    <textarea id="session_notes"
                        rows="5"
                        class="textarea textarea-bordered w-full"
                        on:input=move |ev| notes.set(event_target_value(&ev))
                        prop:value=move || notes.get()
                    ></textarea>
                </div>
                <div class="form-control">
                    <span class="label-text mb-2">"Completed topics"</span>
                    <Show
                        when=move || options.with(|o| !o.is_empty())
                        fallback=|| view! { <p class="text-sm text-base-content/50">"This plan has no topics."</p> }
                    >
                        <For
                            each=move || options.get()
                            key=|(id, _)| id.clone()
                            children=move |(id, title)| {
                                let checked_id = id.clone();
                                view! {
                                    <label class="label cursor-pointer justify-start gap-3">
                                        <input
                                            type="checkbox"
                                            class="checkbox checkbox-primary checkbox-sm"
                                            prop:checked=move || selected.with(|s| s.contains(&checked_id))
                                            on:change=move |_| selected.update(|s| session::toggle_topic(s, &id))
                                        />
                                        <span class="label-text">{title}</span>
                                    </label>
                                }
                            }
                        />
                    </Show>
                </div>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                        {move || if submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                        } else {
                            "Save".into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
