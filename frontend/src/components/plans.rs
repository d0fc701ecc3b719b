use leptos::prelude::*;
use studere_shared::{Course, StudyPlan};

use crate::api::use_api;
use crate::components::feedback::{EmptyState, LoadErrorBanner, Notification, Toast};
use crate::components::icons::{Plus, Sparkles};
use crate::components::layout::{BaseLayout, PageHeader};
use crate::components::list_state::ListState;

mod ai_plan_dialog;
mod form_state;
mod manual_plan_dialog;
mod plan_card;

use ai_plan_dialog::AiPlanDialog;
use manual_plan_dialog::ManualPlanDialog;
use plan_card::PlanCard;

#[component]
pub fn PlansPage() -> impl IntoView {
    let api = use_api();
    let plans = ListState::<StudyPlan>::new();
    let courses = ListState::<Course>::new();
    let notification = RwSignal::new(Notification::None);

    let load = move || {
        let client = api.client();
        plans.load("study plans", async move { client.list_plans().await });
        let client = api.client();
        courses.load("courses", async move { client.list_courses().await });
    };
    load();

    let load_error = Signal::derive(move || plans.load_error.get().or_else(|| courses.load_error.get()));

    let manual_open = RwSignal::new(false);
    let ai_open = RwSignal::new(false);

    // 两种创建方式都只追加
    let on_created = Callback::new(move |plan: StudyPlan| {
        notification.set(Some((format!("Study plan \"{}\" created", plan.title), false)));
        plans.upsert(plan);
    });

    let on_deleted = Callback::new(move |id: String| {
        plans.remove(&id);
        notification.set(Some(("Study plan deleted".to_string(), false)));
    });

    view! {
        <BaseLayout>
            <Toast notification=notification />
            <PageHeader title="Study Plans">
                <div class="flex gap-2">
                    <button class="btn btn-secondary gap-2" on:click=move |_| ai_open.set(true)>
                        <Sparkles attr:class="h-4 w-4" />
                        "Generate with AI"
                    </button>
                    <button class="btn btn-primary gap-2" on:click=move |_| manual_open.set(true)>
                        <Plus attr:class="h-4 w-4" />
                        "New Plan"
                    </button>
                </div>
            </PageHeader>
            <LoadErrorBanner error=load_error on_retry=move |_| load() />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <Show when=move || plans.is_empty()>
                    <EmptyState loading=plans.loading message="No study plans yet." />
                </Show>
                <For
                    each=move || plans.items.get()
                    key=|plan| plan.id.clone()
                    children=move |plan| view! {
                        <PlanCard plan=plan courses=courses.items on_deleted=on_deleted />
                    }
                />
            </div>
            <ManualPlanDialog courses=courses.items open=manual_open on_created=on_created />
            <AiPlanDialog courses=courses.items open=ai_open on_created=on_created />
        </BaseLayout>
    }
}

/// 课程下拉框，两个创建对话框共用
#[component]
fn CourseSelect(id: &'static str, courses: RwSignal<Vec<Course>>, value: RwSignal<String>) -> impl IntoView {
    view! {
        <select id=id
            class="select select-bordered w-full"
            on:change=move |ev| value.set(event_target_value(&ev))
            prop:value=move || value.get()
        >
            <option value="" disabled selected>"Select a course"</option>
            <For
                each=move || courses.get()
                key=|course| course.id.clone()
                children=move |course| {
                    let course_id = course.id.clone();
                    view! {
                        <option value=course.id selected=move || value.get() == course_id>{course.name}</option>
                    }
                }
            />
        </select>
    }
}
