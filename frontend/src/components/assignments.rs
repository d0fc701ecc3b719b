use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::collection::find_by_id;
use studere_shared::{Assignment, AssignmentRequest, AssignmentType, Course, date, validation};
use tracing::warn;

use crate::api::use_api;
use crate::components::feedback::{EmptyState, ErrorAlert, LoadErrorBanner, Notification, Toast};
use crate::components::icons::{ClipboardList, Pencil, Plus, Trash2};
use crate::components::layout::{BaseLayout, PageHeader};
use crate::components::list_state::ListState;
use crate::components::modal::Modal;

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let api = use_api();
    let assignments = ListState::<Assignment>::new();
    let courses = ListState::<Course>::new();
    let notification = RwSignal::new(Notification::None);

    let load = move || {
        let client = api.client();
        assignments.load("assignments", async move { client.list_assignments().await });
        let client = api.client();
        courses.load("courses", async move { client.list_courses().await });
    };
    load();

    let load_error =
        Signal::derive(move || assignments.load_error.get().or_else(|| courses.load_error.get()));

    let form = AssignmentForm::new();
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let open_create = move |_| {
        form.reset();
        editing.set(None);
        dialog_open.set(true);
    };

    let open_edit = Callback::new(move |assignment: Assignment| {
        form.fill(&assignment);
        editing.set(Some(assignment.id));
        dialog_open.set(true);
    });

    let on_saved = Callback::new(move |assignment: Assignment| {
        notification.set(Some((format!("Assignment \"{}\" saved", assignment.title), false)));
        assignments.upsert(assignment);
    });

    let on_deleted = Callback::new(move |id: String| {
        assignments.remove(&id);
        notification.set(Some(("Assignment deleted".to_string(), false)));
    });

    view! {
        <BaseLayout>
            <Toast notification=notification />
            <PageHeader title="Assignments">
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "New Assignment"
                </button>
            </PageHeader>
            <LoadErrorBanner error=load_error on_retry=move |_| load() />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                <Show when=move || assignments.is_empty()>
                    <EmptyState loading=assignments.loading message="No assignments yet." />
                </Show>
                <For
                    each=move || assignments.items.get()
                    key=|a| (a.id.clone(), a.title.clone(), a.description.clone(), a.due_at.clone(), a.kind, a.course_id.clone())
                    children=move |assignment| view! {
                        <AssignmentCard
                            assignment=assignment
                            courses=courses.items
                            on_edit=open_edit
                            on_deleted=on_deleted
                        />
                    }
                />
            </div>
            <AssignmentDialog
                form=form
                courses=courses.items
                open=dialog_open
                editing=editing
                on_saved=on_saved
            />
        </BaseLayout>
    }
}

#[component]
fn AssignmentCard(
    assignment: Assignment,
    courses: RwSignal<Vec<Course>>,
    #[prop(into)] on_edit: Callback<Assignment>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let deleting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let course_id = assignment.course_id.clone();
    let course_name = move || {
        courses.with(|list| {
            find_by_id(list, &course_id)
                .map(|course| course.name.clone())
                .unwrap_or_else(|| course_id.clone())
        })
    };

    let id = assignment.id.clone();
    let on_delete = move |_| {
        let client = api.client();
        let id = id.clone();
        deleting.set(true);
        error.set(None);
        spawn_local(async move {
            match client.delete_assignment(&id).await {
                Ok(()) => on_deleted.run(id),
                Err(e) => {
                    warn!(%id, error = %e, "failed to delete assignment");
                    error.set(Some(e.user_message()));
                    deleting.set(false);
                }
            }
        });
    };

    let badge = match assignment.kind {
        AssignmentType::Exam => "badge badge-error badge-outline",
        AssignmentType::Project => "badge badge-info badge-outline",
    };
    let edit_assignment = assignment.clone();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="card-title">
                        <ClipboardList attr:class="h-5 w-5 text-primary" />
                        {assignment.title.clone()}
                    </h2>
                    <span class=badge>{assignment.kind.label()}</span>
                </div>
                <p class="text-sm">{assignment.description.clone()}</p>
                <p class="text-sm text-base-content/70">"Course: " {course_name}</p>
                <p class="text-sm text-base-content/70">"Due: " {date::format_datetime(&assignment.due_at)}</p>
                {assignment.score.map(|score| view! {
                    <p class="text-sm text-base-content/70">"Score: " {score}</p>
                })}
                <ErrorAlert message=error />
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost btn-sm gap-1" on:click=move |_| on_edit.run(edit_assignment.clone())>
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
struct AssignmentForm {
    title: RwSignal<String>,
    description: RwSignal<String>,
    /// `datetime-local` 输入框的值
    due_at: RwSignal<String>,
    kind: RwSignal<AssignmentType>,
    course_id: RwSignal<String>,
}

impl AssignmentForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            due_at: RwSignal::new(String::new()),
            kind: RwSignal::new(AssignmentType::default()),
            course_id: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.due_at.set(String::new());
        self.kind.set(AssignmentType::default());
        self.course_id.set(String::new());
    }

    fn fill(&self, assignment: &Assignment) {
        let req = AssignmentRequest::from(assignment);
        self.title.set(req.title);
        self.description.set(req.description);
        self.due_at.set(req.due_at);
        self.kind.set(req.kind);
        self.course_id.set(req.course_id);
    }

    fn to_request(&self) -> AssignmentRequest {
        let due_at = self.due_at.get_untracked();
        AssignmentRequest {
            title: self.title.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            due_at: if due_at.is_empty() { due_at } else { date::from_datetime_input(&due_at) },
            kind: self.kind.get_untracked(),
            course_id: self.course_id.get_untracked(),
        }
    }
}

#[component]
fn AssignmentDialog(
    form: AssignmentForm,
    courses: RwSignal<Vec<Course>>,
    open: RwSignal<bool>,
    editing: RwSignal<Option<String>>,
    #[prop(into)] on_saved: Callback<Assignment>,
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
        if editing.get().is_some() { "Edit Assignment" } else { "New Assignment" }.to_string()
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
                Some(id) => client.update_assignment(id, req).await,
                None => client.create_assignment(&req).await,
            };
            match result {
                Ok(assignment) => {
                    on_saved.run(assignment);
                    open.set(false);
                    form.reset();
                }
                Err(e) => {
                    warn!(editing = ?target, error = %e, "failed to save assignment");
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
                    <label for="assignment_title" class="label">
                        <span class="label-text">"Title"</span>
                    </label>
                    <input id="assignment_title" required
                        type="text"
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                        prop:value=move || form.title.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="assignment_description" class="label">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea id="assignment_description" required
                        class="textarea textarea-bordered w-full"
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                        prop:value=move || form.description.get()
                    ></textarea>
                </div>
                <div class="form-control">
                    <label for="assignment_due" class="label">
                        <span class="label-text">"Due"</span>
                    </label>
                    <input id="assignment_due" required
                        type="datetime-local"
                        on:input=move |ev| form.due_at.set(event_target_value(&ev))
                        prop:value=move || form.due_at.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="assignment_type" class="label">
                            <span class="label-text">"Type"</span>
                        </label>
                        <select id="assignment_type"
                            class="select select-bordered w-full"
                            on:change=move |ev| form.kind.set(AssignmentType::from_value(&event_target_value(&ev)))
                            prop:value=move || form.kind.get().as_str()
                        >
                            {AssignmentType::ALL
                                .into_iter()
                                .map(|kind| view! {
                                    <option value=kind.as_str() selected=move || form.kind.get() == kind>
                                        {kind.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-control">
                        <label for="assignment_course" class="label">
                            <span class="label-text">"Course"</span>
                        </label>
                        <select id="assignment_course"
                            class="select select-bordered w-full"
                            on:change=move |ev| form.course_id.set(event_target_value(&ev))
                            prop:value=move || form.course_id.get()
                        >
                            <option value="" disabled selected>"Select a course"</option>
                            <For
                                each=move || courses.get()
                                key=|course| course.id.clone()
                                children=move |course| {
                                    let id = course.id.clone();
                                    view! {
                                        <option value=course.id selected=move || form.course_id.get() == id>
                                            {course.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
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
