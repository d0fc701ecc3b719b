use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

fn menu_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <LayoutDashboard attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Terms => view! { <CalendarDays attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Courses => view! { <GraduationCap attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Assignments => view! { <ClipboardList attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Plans => view! { <ListChecks attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Sessions => view! { <Timer attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Login | AppRoute::NotFound => ().into_any(),
    }
}

/// 登录后所有页面共用的外框：顶栏、侧边导航、登出按钮
#[component]
pub fn BaseLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();

    let on_logout = move |_| logout(&auth);

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200 font-sans">
            <input id="studere-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-none lg:hidden">
                        <label for="studere-drawer" class="btn btn-square btn-ghost">"☰"</label>
                    </div>
                    <div class="flex-1 gap-2">
                        <BookOpen attr:class="h-6 w-6 text-primary" />
                        <span class="text-xl font-bold">"Studere"</span>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" />
                            "Logout"
                        </button>
                    </div>
                </div>
                <main class="p-4 md:p-8 max-w-7xl w-full mx-auto space-y-6">{children()}</main>
            </div>
            <div class="drawer-side">
                <label for="studere-drawer" class="drawer-overlay"></label>
                <ul class="menu p-4 w-64 min-h-full bg-base-100 gap-1">
                    {AppRoute::MENU
                        .into_iter()
                        .map(|route| {
                            let class = Signal::derive(move || {
                                if current.get() == route {
                                    "active".to_string()
                                } else {
                                    String::new()
                                }
                            });
                            view! {
                                <li>
                                    <Link route=route class=class>
                                        {menu_icon(route)}
                                        {route.title()}
                                    </Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// 每个页面的标题行，右侧放操作按钮
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <h1 class="text-3xl font-bold">{title}</h1>
            <div class="flex gap-2">{children.map(|c| c())}</div>
        </div>
    }
}
