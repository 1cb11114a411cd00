/// Утилиты для списков: поиск с подсветкой совпадений
use leptos::prelude::*;

/// Разбить текст на фрагменты (текст, совпадение?) по запросу без учёта регистра
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    if filter.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    // Смещения байт совпадают только если регистр не меняет длину
    if text_lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_matches(text, filter)
        .into_iter()
        .map(|(chunk, is_match)| {
            if is_match {
                view! { <mark class="search-match">{chunk}</mark> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
