use leptos::prelude::*;
use studere_shared::Term;

use crate::api::use_api;
use crate::components::feedback::{EmptyState, LoadErrorBanner, Notification, Toast};
use crate::components::icons::Plus;
use crate::components::layout::{BaseLayout, PageHeader};
use crate::components::list_state::ListState;

mod term_card;
mod term_dialog;

use term_card::TermCard;
use term_dialog::{TermDialog, TermForm};

#[component]
pub fn TermsPage() -> impl IntoView {
    let api = use_api();
    let terms = ListState::<Term>::new();
    let notification = RwSignal::new(Notification::None);

    let load = move || {
        let client = api.client();
        terms.load("terms", async move { client.list_terms().await });
    };
    load();

    // 对话框状态：None 表示新建，Some(id) 表示编辑
    let form = TermForm::new();
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let open_create = move |_| {
        form.reset();
        editing.set(None);
        dialog_open.set(true);
    };

    let open_edit = Callback::new(move |term: Term| {
        form.fill(&term);
        editing.set(Some(term.id));
        dialog_open.set(true);
    });

    let on_saved = Callback::new(move |term: Term| {
        let verb = if editing.get_untracked().is_some() { "updated" } else { "created" };
        notification.set(Some((format!("Term \"{}\" {}", term.name, verb), false)));
        terms.upsert(term);
    });

    let on_deleted = Callback::new(move |id: String| {
        terms.remove(&id);
        notification.set(Some(("Term deleted".to_string(), false)));
    });

    view! {
        <BaseLayout>
            <Toast notification=notification />
            <PageHeader title="Terms">
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "New Term"
                </button>
            </PageHeader>
            <LoadErrorBanner error=terms.load_error on_retry=move |_| load() />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                <Show when=move || terms.is_empty()>
                    <EmptyState loading=terms.loading message="No terms yet. Create one to get started." />
                </Show>
                <For
                    each=move || terms.items.get()
                    key=|term| (term.id.clone(), term.name.clone(), term.start_date.clone(), term.end_date.clone())
                    children=move |term| view! { <TermCard term=term on_edit=open_edit on_deleted=on_deleted /> }
                />
            </div>
            <TermDialog form=form open=dialog_open editing=editing on_saved=on_saved />
        </BaseLayout>
    }
}
