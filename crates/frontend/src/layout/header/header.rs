use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::config::Page;
use crate::shared::icons;
use crate::shared::theme::ThemeToggle;

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Products => "products",
        Page::Donors => "droplet",
        Page::NewListing => "plus",
    }
}

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{icons::icon("map-pin")} {title}</span>
                <nav class="header__nav">
                    {Page::all()
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class="header__nav-btn"
                                class:header__nav-btn--active=move || ctx.is_active(page)
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icons::icon(page_icon(page))}
                                <span>{page.title()}</span>
                            </button>
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
