use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::{Term, date};
use tracing::warn;

use crate::api::use_api;
use crate::components::feedback::ErrorAlert;
use crate::components::icons::{CalendarDays, Pencil, Trash2};

#[component]
pub fn TermCard(
    term: Term,
    #[prop(into)] on_edit: Callback<Term>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let deleting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let id = term.id.clone();
    let on_delete = move |_| {
        let client = api.client();
        let id = id.clone();
        deleting.set(true);
        error.set(None);
        spawn_local(async move {
            match client.delete_term(&id).await {
                Ok(()) => on_deleted.run(id),
                Err(e) => {
                    warn!(%id, error = %e, "failed to delete term");
                    error.set(Some(e.user_message()));
                    deleting.set(false);
                }
            }
        });
    };

    let edit_term = term.clone();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{term.name.clone()}</h2>
                <div class="flex items-center gap-2 text-sm text-base-content/70">
                    <CalendarDays attr:class="h-4 w-4" />
                    <span>"Start: " {date::format_date(&term.start_date)}</span>
                </div>
                <div class="flex items-center gap-2 text-sm text-base-content/70">
                    <CalendarDays attr:class="h-4 w-4" />
                    <span>"End: " {date::format_date(&term.end_date)}</span>
                </div>
                <ErrorAlert message=error />
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost btn-sm gap-1" on:click=move |_| on_edit.run(edit_term.clone())>
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
