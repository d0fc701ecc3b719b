use leptos::prelude::*;
use leptos::task::spawn_local;
use studere_shared::chart::{self, PieSlice, VIEW_SIZE};
use studere_shared::StudyTime;
use tracing::error;

use crate::api::use_api;
use crate::components::feedback::LoadErrorBanner;
use crate::components::icons::Check;
use crate::components::layout::{BaseLayout, PageHeader};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <BaseLayout>
            <PageHeader title="Dashboard" />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <StreakCard />
                <StudyTimeChart />
            </div>
        </BaseLayout>
    }
}

/// 最近 7 天的学习打卡
#[component]
fn StreakCard() -> impl IntoView {
    let api = use_api();
    let streaks = RwSignal::new(Vec::<bool>::new());
    let load_error = RwSignal::new(None::<String>);

    let load = move || {
        let client = api.client();
        spawn_local(async move {
            match client.streaks().await {
                Ok(data) => {
                    streaks.set(data.streaks);
                    load_error.set(None);
                }
                Err(e) => {
                    error!(error = %e, "failed to load streaks");
                    load_error.set(Some(e.user_message()));
                }
            }
        });
    };
    load();

    let count = move || streaks.with(|s| chart::streak_count(s));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body items-center">
                <h2 class="card-title">"Streaks"</h2>
                <LoadErrorBanner error=load_error on_retry=move |_| load() />
                <div class="flex gap-2 my-4">
                    {move || {
                        let days = streaks.get();
                        let len = days.len();
                        days.into_iter()
                            .enumerate()
                            .map(|(i, studied)| {
                                view! {
                                    <div class="flex flex-col items-center gap-1">
                                        <div class=if studied {
                                            "w-10 h-10 rounded-full bg-success text-success-content flex items-center justify-center"
                                        } else {
                                            "w-10 h-10 rounded-full bg-base-300"
                                        }>
                                            {studied.then(|| view! { <Check attr:class="h-5 w-5" /> })}
                                        </div>
                                        <span class="text-xs opacity-60">{day_label(len - 1 - i)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class=move || {
                    if count() > 0 { "badge badge-lg badge-success gap-1" } else { "badge badge-lg badge-ghost gap-1" }
                }>
                    {move || chart::streak_label(count())}
                </div>
            </div>
        </div>
    }
}

/// 按课程统计的学习时长圆环图
#[component]
fn StudyTimeChart() -> impl IntoView {
    let api = use_api();
    let data = RwSignal::new(Vec::<StudyTime>::new());
    let load_error = RwSignal::new(None::<String>);

    let load = move || {
        let client = api.client();
        spawn_local(async move {
            match client.study_time_by_course().await {
                Ok(list) => {
                    data.set(list);
                    load_error.set(None);
                }
                Err(e) => {
                    error!(error = %e, "failed to load study time");
                    load_error.set(Some(e.user_message()));
                }
            }
        });
    };
    load();

    let slices = Memo::new(move |_| data.with(|d| chart::pie_slices(d)));
    let total = move || data.with(|d| chart::total_seconds(d));
    let view_box = format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE);

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body items-center">
                <h2 class="card-title">"Total Study Time"</h2>
                <LoadErrorBanner error=load_error on_retry=move |_| load() />
                <svg viewBox=view_box class="w-full max-w-sm h-auto overflow-visible">
                    <Show
                        when=move || { total() > 0.0 }
                        fallback=|| view! {
                            <path d=chart::empty_ring_path() fill="currentColor" fill-rule="evenodd" class="text-base-300" />
                        }
                    >
                        {move || slices.get().into_iter().map(slice_view).collect_view()}
                    </Show>
                </svg>
                <p class="mt-2 font-bold">{move || chart::hours_minutes(total())}</p>
                <Show when=move || data.with(|d| d.is_empty()) && load_error.with(|e| e.is_none())>
                    <p class="text-sm text-base-content/50">"No study sessions recorded yet."</p>
                </Show>
            </div>
        </div>
    }
}

/// 倒数第 `days_ago` 天的标签
fn day_label(days_ago: usize) -> String {
    if days_ago == 0 {
        "Today".to_string()
    } else {
        format!("-{}d", days_ago)
    }
}

fn slice_view(slice: PieSlice) -> impl IntoView {
    view! {
        <g>
            <path d=slice.path fill=slice.color fill-rule="evenodd" />
            <text
                x=format!("{:.1}", slice.label_x)
                y=format!("{:.1}", slice.label_y)
                text-anchor=slice.text_anchor
                dominant-baseline="middle"
                class="text-xs fill-current"
            >
                {slice.label}
            </text>
        </g>
    }
}
