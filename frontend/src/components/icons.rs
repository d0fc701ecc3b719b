//! 内联 SVG 图标（Lucide 线条风格）
//!
//! 用法：`<Plus attr:class="h-4 w-4" />`，class 会透传到 `<svg>` 上。

use leptos::prelude::*;

macro_rules! icon {
    ($($(#[$meta:meta])* $name:ident => $paths:literal;)*) => {
        $(
            $(#[$meta])*
            #[component]
            pub fn $name() -> impl IntoView {
                view! {
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        inner_html=$paths
                    ></svg>
                }
            }
        )*
    };
}

icon! {
    BookOpen => r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#;
    LayoutDashboard => r#"<rect width="7" height="9" x="3" y="3" rx="1"/><rect width="7" height="5" x="14" y="3" rx="1"/><rect width="7" height="9" x="14" y="12" rx="1"/><rect width="7" height="5" x="3" y="16" rx="1"/>"#;
    CalendarDays => r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#;
    GraduationCap => r#"<path d="M22 10 12 5 2 10l10 5 10-5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#;
    ClipboardList => r#"<rect width="8" height="4" x="8" y="2" rx="1"/><path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/><path d="M12 11h4M12 16h4M8 11h.01M8 16h.01"/>"#;
    ListChecks => r#"<path d="m3 17 2 2 4-4M3 7l2 2 4-4M13 6h8M13 12h8M13 18h8"/>"#;
    Timer => r#"<path d="M10 2h4M12 14l3-3"/><circle cx="12" cy="14" r="8"/>"#;
    LogOut => r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="m16 17 5-5-5-5M21 12H9"/>"#;
    Plus => r#"<path d="M5 12h14M12 5v14"/>"#;
    Pencil => r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"#;
    Trash2 => r#"<path d="M3 6h18M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2M10 11v6M14 11v6"/>"#;
    Check => r#"<path d="M20 6 9 17l-5-5"/>"#;
    X => r#"<path d="M18 6 6 18M6 6l12 12"/>"#;
    Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#;
    Pause => r#"<rect x="14" y="4" width="4" height="16" rx="1"/><rect x="6" y="4" width="4" height="16" rx="1"/>"#;
    Square => r#"<rect width="14" height="14" x="5" y="5" rx="2"/>"#;
    ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#;
    ChevronUp => r#"<path d="m18 15-6-6-6 6"/>"#;
    Sparkles => r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/>"#;
    RefreshCw => r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#;
    AlertCircle => r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4M12 16h.01"/>"#;
}
