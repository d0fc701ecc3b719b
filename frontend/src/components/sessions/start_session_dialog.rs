use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::{StudySession, StudySessionRequest, validation};
use tracing::{info, warn};

use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::modal::Modal;

#[component]
pub fn StartSessionDialog(
    open: RwSignal<bool>,
    /// 当前选中的计划；"Show all" 时为 None
    #[prop(into)]
    plan_id: Signal<Option<String>>,
    #[prop(into)] on_started: Callback<StudySession>,
) -> impl IntoView {
    let api = use_api();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if open.get() {
            error.set(None);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(plan_id) = plan_id.get_untracked() else {
            error.set(Some("Select a study plan first".to_string()));
            return;
        };
        let req = StudySessionRequest {
            title: title.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            plan_id,
        };
        if let Err(msg) = validation::check(&req) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        error.set(None);
        let client = api.client();
        spawn_local(async move {
            match client.start_session(&req).await {
                Ok(session) => {
                    info!(plan_id = %req.plan_id, "study session started");
                    on_started.run(session);
                    open.set(false);
                    title.set(String::new());
                    description.set(String::new());
                }
                Err(e) => {
                    warn!(plan_id = %req.plan_id, error = %e, "failed to start session");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Modal open=open title="Start Session">
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=error />
                <div class="form-control">
                    <label for="session_title" class="label">
                        <span class="label-text">"Title"</span>
                    </label>
                    <input id="session_title" required
                        type="text"
                        on:input=move |ev| title.set(event_target_value(&ev))
                        prop:value=move || title.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="session_description" class="label">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea id="session_description" required
                        class="textarea textarea-bordered w-full"
                        on:input=move |ev| description.set(event_target_value(&ev))
                        prop:value=move || description.get()
                    ></textarea>
                </div>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                        {move || if submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Starting..." }.into_any()
                        } else {
                            "Start".into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
