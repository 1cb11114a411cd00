use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::state::use_selection;

/// Чип активного фильтра по региону с кнопкой сброса.
/// Работает с хранилищем выбора текущей страницы.
#[component]
pub fn FilterChip() -> impl IntoView {
    let selection = use_selection();
    let region = selection.selected_region();

    move || {
        region.get().map(|region| {
            view! {
                <span class="filter-chip">
                    {icon("map-pin")}
                    <span class="filter-chip__label">{region.name}</span>
                    <button
                        class="filter-chip__clear"
                        title="Clear filter"
                        on:click=move |_| selection.clear()
                    >
                        {icon("x")}
                    </button>
                </span>
            }
        })
    }
}
