pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Оболочка приложения: шапка с навигацией и область текущей страницы.
///
/// ```text
/// +------------------------------------------+
/// |   Header (title, pages, theme toggle)    |
/// +------------------------------------------+
/// |              Center (page)               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(#[prop(into)] title: String, center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send + Sync,
{
    view! {
        <div class="app-layout">
            <header::Header title=title />
            <main class="app-main">
                {center}
            </main>
        </div>
    }
}
