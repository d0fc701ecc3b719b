use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::collection::find_by_id;
use studere_shared::{Course, StudyPlan, date};
use tracing::warn;

use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::icons::{Check, ListChecks, Trash2};
use crate::components::modal::ConfirmDialog;

#[component]
pub fn PlanCard(
    plan: StudyPlan,
    courses: RwSignal<Vec<Course>>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let confirm_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let course_id = plan.course_id.clone();
    let course_name = move || {
        courses.with(|list| {
            find_by_id(list, &course_id)
                .map(|course| course.name.clone())
                .unwrap_or_else(|| course_id.clone())
        })
    };

    let id = plan.id.clone();
    let on_confirm = Callback::new(move |_: ()| {
        let client = api.client();
        let id = id.clone();
        deleting.set(true);
        error.set(None);
        spawn_local(async move {
            match client.delete_plan(&id).await {
                Ok(()) => {
                    confirm_open.set(false);
                    on_deleted.run(id);
                }
                Err(e) => {
                    warn!(%id, error = %e, "failed to delete study plan");
                    confirm_open.set(false);
                    error.set(Some(e.user_message()));
                    deleting.set(false);
                }
            }
        });
    });

    let progress = format!("{}/{} topics", plan.completed_topics(), plan.topics.len());
    let created = (!plan.created_at.is_empty()).then(|| date::format_date(&plan.created_at));

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="card-title">
                        <ListChecks attr:class="h-5 w-5 text-primary" />
                        {plan.title.clone()}
                    </h2>
                    <span class="badge badge-outline">{progress}</span>
                </div>
                <p class="text-sm text-base-content/70">"Course: " {course_name}</p>
                {created.map(|d| view! { <p class="text-xs text-base-content/50">"Created " {d}</p> })}
                <ul class="mt-2 space-y-2">
                    {plan.topics.iter().map(|topic| {
                        let done = topic.is_completed();
                        view! {
                            <li class="flex items-start gap-2">
                                <span class={
                                    if done {
                                        "mt-0.5 rounded-full bg-success text-success-content p-0.5"
                                    } else {
                                        "mt-0.5 rounded-full border border-base-300 w-5 h-5"
                                    }
                                }>
                                    {done.then(|| view! { <Check attr:class="h-4 w-4" /> })}
                                </span>
                                <div>
                                    <p class={ if done { "font-medium line-through opacity-60" } else { "font-medium" } }>
                                        {topic.title.clone()}
                                    </p>
                                    <p class="text-sm text-base-content/60">{topic.description.clone()}</p>
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <ErrorAlert message=error />
                <div class="card-actions justify-end">
                    <button
                        class="btn btn-ghost btn-sm gap-1 text-error"
                        disabled=move || deleting.get()
                        on:click=move |_| confirm_open.set(true)
                    >
                        <Trash2 attr:class="h-4 w-4" />
                        "Delete"
                    </button>
                </div>
            </div>
            <ConfirmDialog
                open=confirm_open
                title="Delete study plan"
                message=format!("Delete \"{}\"? Its topics will be removed as well.", plan.title)
                busy=deleting
                on_confirm=on_confirm
            />
        </div>
    }
}
