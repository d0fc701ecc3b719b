//! 学期的新建 / 编辑对话框

use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::{Term, TermRequest, validation};
use tracing::warn;

use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::modal::Modal;

/// 表单状态结构体
#[derive(Clone, Copy)]
pub struct TermForm {
    pub name: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl TermForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
    }

    /// 编辑时预填
    pub fn fill(&self, term: &Term) {
        let req = TermRequest::from(term);
        self.name.set(req.name);
        self.start_date.set(req.start_date);
        self.end_date.set(req.end_date);
    }

    pub fn to_request(&self) -> TermRequest {
        TermRequest {
            name: self.name.get_untracked().trim().to_string(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
        }
    }
}

#[component]
pub fn TermDialog(
    form: TermForm,
    open: RwSignal<bool>,
    editing: RwSignal<Option<String>>,
    #[prop(into)] on_saved: Callback<Term>,
) -> impl IntoView {
    let api = use_api();
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // 每次打开都清掉上一次的错误
    Effect::new(move |_| {
        if open.get() {
            error.set(None);
        }
    });

    let title = Signal::derive(move || {
        if editing.get().is_some() { "Edit Term" } else { "New Term" }.to_string()
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
                Some(id) => client.update_term(id, req).await,
                None => client.create_term(&req).await,
            };
            match result {
                Ok(term) => {
                    on_saved.run(term);
                    open.set(false);
                    form.reset();
                }
                Err(e) => {
                    warn!(editing = ?target, error = %e, "failed to save term");
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
                    <label for="term_name" class="label">
                        <span class="label-text">"Name"</span>
                    </label>
                    <input id="term_name" required
                        type="text"
                        placeholder="Fall 2024"
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                        prop:value=move || form.name.get()
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="term_start" class="label">
                            <span class="label-text">"Start date"</span>
                        </label>
                        <input id="term_start" required
                            type="date"
                            on:input=move |ev| form.start_date.set(event_target_value(&ev))
                            prop:value=move || form.start_date.get()
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="term_end" class="label">
                            <span class="label-text">"End date"</span>
                        </label>
                        <input id="term_end" required
                            type="date"
                            on:input=move |ev| form.end_date.set(event_target_value(&ev))
                            prop:value=move || form.end_date.get()
                            class="input input-bordered w-full"
                        />
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
