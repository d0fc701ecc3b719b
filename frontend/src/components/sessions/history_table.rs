use leptos::prelude::*;
use studere_shared::{StudySession, date};

use crate::components::icons::{Check, ChevronDown, ChevronUp};

/// 会话历史表格，每一行可单独展开查看笔记和主题
#[component]
pub fn HistoryTable(sessions: RwSignal<Vec<StudySession>>, loading: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Title"</th>
                        <th>"Description"</th>
                        <th>"Start"</th>
                        <th>"End"</th>
                        <th>"Duration"</th>
                    </tr>
                </thead>
                <Show
                    when=move || sessions.with(|s| !s.is_empty())
                    fallback=move || view! {
                        <tbody>
                            <tr>
                                <td colspan="6" class="text-center text-base-content/50 py-6">
                                    {move || if loading.get() { "Loading..." } else { "No sessions recorded yet." }}
                                </td>
                            </tr>
                        </tbody>
                    }
                >
                    <For
                        each=move || sessions.get()
                        key=|s| (s.id.clone(), s.status, s.ended_at.clone())
                        children=|session| view! { <HistoryRow session=session /> }
                    />
                </Show>
            </table>
        </div>
    }
}

#[component]
fn HistoryRow(session: StudySession) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let ended = session
        .ended_at
        .as_deref()
        .map(date::format_datetime)
        .unwrap_or_else(|| "-".to_string());
    let duration = session
        .study_time
        .map(date::format_study_time)
        .unwrap_or_else(|| "-".to_string());
    let notes = session
        .notes
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "No notes.".to_string());
    let topics: Vec<(String, bool)> = session
        .topics
        .iter()
        .map(|topic| (topic.title().to_string(), topic.is_completed()))
        .collect();

    view! {
        <tbody>
            <tr class="hover cursor-pointer" on:click=move |_| expanded.update(|e| *e = !*e)>
                <td>
                    {move || if expanded.get() {
                        view! { <ChevronUp attr:class="h-4 w-4" /> }.into_any()
                    } else {
                        view! { <ChevronDown attr:class="h-4 w-4" /> }.into_any()
                    }}
                </td>
                <td class="font-medium">{session.title.clone()}</td>
                <td>{session.description.clone()}</td>
                <td>{date::format_datetime(&session.started_at)}</td>
                <td>{ended}</td>
                <td>{duration}</td>
            </tr>
            <Show when=move || expanded.get()>
                <tr class="bg-base-200">
                    <td></td>
                    <td colspan="5">
                        <div class="grid md:grid-cols-2 gap-4 py-2">
                            <div>
                                <h4 class="font-semibold text-sm">"Notes"</h4>
                                <p class="whitespace-pre-wrap text-sm">{notes.clone()}</p>
                            </div>
                            <div>
                                <h4 class="font-semibold text-sm">"Topics"</h4>
                                <ul class="text-sm space-y-1">
                                    {topics.clone().into_iter().map(|(title, done)| {
                                        view! {
                                            <li class="flex items-center gap-2">
                                                <span class={ if done { "text-success" } else { "text-base-content/30" } }>
                                                    <Check attr:class="h-4 w-4" />
                                                </span>
                                                {title}
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </div>
                        </div>
                    </td>
                </tr>
            </Show>
        </tbody>
    }
}
