use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::{Course, StudyPlan, validation};
use tracing::{info, warn};

use super::CourseSelect;
use super::form_state::AiPlanForm;
use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::icons::Sparkles;
use crate::components::modal::Modal;

/// 由后端根据提示词生成计划，可能需要较长时间
#[component]
pub fn AiPlanDialog(
    courses: RwSignal<Vec<Course>>,
    open: RwSignal<bool>,
    #[prop(into)] on_created: Callback<StudyPlan>,
) -> impl IntoView {
    let api = use_api();
    let form = AiPlanForm::new();
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if open.get() {
            error.set(None);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = form.to_request();
        if let Err(msg) = validation::check(&req) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        error.set(None);
        let client = api.client();
        spawn_local(async move {
            match client.generate_plan(&req).await {
                Ok(plan) => {
                    info!(topics = plan.topics.len(), "study plan generated");
                    on_created.run(plan);
                    open.set(false);
                    form.reset();
                }
                Err(e) => {
                    warn!(error = %e, "failed to generate study plan");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Modal open=open title="Generate Study Plan">
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=error />
                <div class="form-control">
                    <label for="ai_prompt" class="label">
                        <span class="label-text">"What do you want to study?"</span>
                    </label>
                    <textarea id="ai_prompt" required
                        rows="4"
                        placeholder="Prepare for the final exam: eigenvalues, diagonalization, SVD"
                        class="textarea textarea-bordered w-full"
                        on:input=move |ev| form.prompt.set(event_target_value(&ev))
                        prop:value=move || form.prompt.get()
                    ></textarea>
                </div>
                <div class="form-control">
                    <label for="ai_course" class="label">
                        <span class="label-text">"Course"</span>
                    </label>
                    <CourseSelect id="ai_course" courses=courses value=form.course_id />
                </div>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" disabled=move || submitting.get() class="btn btn-secondary gap-2">
                        {move || if submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Generating..." }.into_any()
                        } else {
                            view! { <Sparkles attr:class="h-4 w-4" /> "Generate" }.into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
