use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::collection::find_by_id;
use studere_shared::{Course, CourseRequest, Term, validation};
use tracing::warn;

use crate::api::use_api;
use crate::components::feedback::{EmptyState, ErrorAlert, LoadErrorBanner, Notification, Toast};
use crate::components::icons::{GraduationCap, Pencil, Plus, Trash2};
use crate::components::layout::{BaseLayout, PageHeader};
use crate::components::list_state::ListState;
use crate::components::modal::Modal;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let api = use_api();
    let courses = ListState::<Course>::new();
    // 仅用于学期下拉框和卡片上的学期名
    let terms = ListState::<Term>::new();
    let notification = RwSignal::new(Notification::None);

    let load = move || {
        let client = api.client();
        courses.load("courses", async move { client.list_courses().await });
        let client = api.client();
        terms.load("terms", async move { client.list_terms().await });
    };
    load();

    let load_error = Signal::derive(move || courses.load_error.get().or_else(|| terms.load_error.get()));

    let form = CourseForm::new();
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let open_create = move |_| {
        form.reset();
        editing.set(None);
        dialog_open.set(true);
    };

    let open_edit = Callback::new(move |course: Course| {
        form.fill(&course);
        editing.set(Some(course.id));
        dialog_open.set(true);
    });

    let on_saved = Callback::new(move |course: Course| {
        notification.set(Some((format!("Course \"{}\" saved", course.name), false)));
        courses.upsert(course);
    });

    let on_deleted = Callback::new(move |id: String| {
        courses.remove(&id);
        notification.set(Some(("Course deleted".to_string(), false)));
    });

    view! {
        <BaseLayout>
            <Toast notification=notification />
            <PageHeader title="Courses">
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "New Course"
                </button>
            </PageHeader>
            <LoadErrorBanner error=load_error on_retry=move |_| load() />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                <Show when=move || courses.is_empty()>
                    <EmptyState loading=courses.loading message="No courses yet." />
                </Show>
                <For
                    each=move || courses.items.get()
                    key=|course| (course.id.clone(), course.name.clone(), course.term_id.clone())
                    children=move |course| view! {
                        <CourseCard course=course terms=terms.items on_edit=open_edit on_deleted=on_deleted />
                    }
                />
            </div>
            <CourseDialog form=form terms=terms.items open=dialog_open editing=editing on_saved=on_saved />
        </BaseLayout>
    }
}

#[component]
fn CourseCard(
    course: Course,
    terms: RwSignal<Vec<Term>>,
    #[prop(into)] on_edit: Callback<Course>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let deleting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let term_id = course.term_id.clone();
    let term_name = move || {
        terms.with(|list| {
            find_by_id(list, &term_id)
                .map(|term| term.name.clone())
                .unwrap_or_else(|| term_id.clone())
        })
    };

    let id = course.id.clone();
    let on_delete = move |_| {
        let client = api.client();
        let id = id.clone();
        deleting.set(true);
        error.set(None);
        spawn_local(async move {
            match client.delete_course(&id).await {
                Ok(()) => on_deleted.run(id),
                Err(e) => {
                    warn!(%id, error = %e, "failed to delete course");
                    error.set(Some(e.user_message()));
                    deleting.set(false);
                }
            }
        });
    };

    let edit_course = course.clone();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">
                    <GraduationCap attr:class="h-5 w-5 text-primary" />
                    {course.name.clone()}
                </h2>
                <p class="text-sm text-base-content/70">"Term: " {term_name}</p>
                <ErrorAlert message=error />
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost btn-sm gap-1" on:click=move |_| on_edit.run(edit_course.clone())>
                        <Pencil attr:class="h-4 w-4" />
                        "Edit"
                    </button>
                    <button
                        class="btn btn-ghost btn-sm gap-1 text-error"
                        disabled=move || deleting.get()
                        on:click=on_delete
                    >
                        <Trash2 attr:class="h-4 w-4" />
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy)]
struct CourseForm {
    name: RwSignal<String>,
    term_id: RwSignal<String>,
}

impl CourseForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            term_id: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.term_id.set(String::new());
    }

    fn fill(&self, course: &Course) {
        let req = CourseRequest::from(course);
        self.name.set(req.name);
        self.term_id.set(req.term_id);
    }

    fn to_request(&self) -> CourseRequest {
        CourseRequest {
            name: self.name.get_untracked().trim().to_string(),
            term_id: self.term_id.get_untracked(),
        }
    }
}

#[component]
fn CourseDialog(
    form: CourseForm,
    terms: RwSignal<Vec<Term>>,
    open: RwSignal<bool>,
    editing: RwSignal<Option<String>>,
    #[prop(into)] on_saved: Callback<Course>,
) -> impl IntoView {
    let api = use_api();
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if open.get() {
            error.set(None);
        }
    });

    let title = Signal::derive(move || {
        if editing.get().is_some() { "Edit Course" } else { "New Course" }.to_string()
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
        let target = editing.get_untracked();
        spawn_local(async move {
            let result = match &target {
                Some(id) => client.update_course(id, req).await,
                None => client.create_course(&req).await,
            };
            match result {
                Ok(course) => {
                    on_saved.run(course);
                    open.set(false);
                    form.reset();
                }
                Err(e) => {
                    warn!(editing = ?target, error = %e, "failed to save course");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Modal open=open title=title>
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=error />
                <div class="form-control">
                    <label for="course_name" class="label">
                        <span class="label-text">"Name"</span>
                    </label>
                    <input id="course_name" required
                        type="text"
                        placeholder="Linear Algebra"
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                        prop:value=move || form.name.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="course_term" class="label">
                        <span class="label-text">"Term"</span>
                    </label>
                    <select id="course_term"
                        class="select select-bordered w-full"
                        on:change=move |ev| form.term_id.set(event_target_value(&ev))
                        prop:value=move || form.term_id.get()
                    >
                        <option value="" disabled selected>"Select a term"</option>
                        <For
                            each=move || terms.get()
                            key=|term| term.id.clone()
                            children=move |term| {
                                let id = term.id.clone();
                                view! {
                                    <option value=term.id selected=move || form.term_id.get() == id>{term.name}</option>
                                }
                            }
                        />
                    </select>
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
