use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::{Course, StudyPlan, validation};
use tracing::warn;

use super::CourseSelect;
use super::form_state::ManualPlanForm;
use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::icons::{Plus, X};
use crate::components::modal::Modal;

#[component]
pub fn ManualPlanDialog(
    courses: RwSignal<Vec<Course>>,
    open: RwSignal<bool>,
    #[prop(into)] on_created: Callback<StudyPlan>,
) -> impl IntoView {
    let api = use_api();
    let form = ManualPlanForm::new();
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
            match client.create_plan(&req).await {
                Ok(plan) => {
                    on_created.run(plan);
                    open.set(false);
                    form.reset();
                }
                Err(e) => {
                    warn!(error = %e, "failed to create study plan");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    let topic_count = move || form.topics.with(Vec::len);

    view! {
        <Modal open=open title="New Study Plan">
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=error />
                <div class="form-control">
                    <label for="plan_title" class="label">
                        <span class="label-text">"Title"</span>
                    </label>
                    <input id="plan_title" required
                        type="text"
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                        prop:value=move || form.title.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="plan_description" class="label">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea id="plan_description" required
                        class="textarea textarea-bordered w-full"
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                        prop:value=move || form.description.get()
                    ></textarea>
                </div>
                <div class="form-control">
                    <label for="plan_course" class="label">
                        <span class="label-text">"Course"</span>
                    </label>
                    <CourseSelect id="plan_course" courses=courses value=form.course_id />
                </div>

                <div class="divider text-sm">"Topics"</div>
                <div class="space-y-3">
                    <For
                        each=move || 0..topic_count()
                        key=|index| *index
                        children=move |index| view! {
                            <div class="flex gap-2 items-start">
                                <div class="flex-1 space-y-2">
                                    <input
                                        type="text"
                                        placeholder="Topic title"
                                        class="input input-bordered input-sm w-full"
                                        on:input=move |ev| form.set_topic_title(index, event_target_value(&ev))
                                        prop:value=move || form.topics.with(|t| t.get(index).map(|d| d.title.clone()).unwrap_or_default())
                                    />
                                    <input
                                        type="text"
                                        placeholder="Topic description"
                                        class="input input-bordered input-sm w-full"
                                        on:input=move |ev| form.set_topic_description(index, event_target_value(&ev))
                                        prop:value=move || form.topics.with(|t| t.get(index).map(|d| d.description.clone()).unwrap_or_default())
                                    />
                                </div>
                                <button
                                    type="button"
                                    class="btn btn-ghost btn-sm btn-square"
                                    title="Remove topic"
                                    disabled=move || { topic_count() <= 1 }
                                    on:click=move |_| form.remove_topic(index)
                                >
                                    <X attr:class="h-4 w-4" />
                                </button>
                            </div>
                        }
                    />
                </div>
                <button type="button" class="btn btn-outline btn-sm gap-1" on:click=move |_| form.add_topic()>
                    <Plus attr:class="h-4 w-4" />
                    "Add topic"
                </button>

                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                        {move || if submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                        } else {
                            "Create".into_any()
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
