//! Карточка списка с анимацией появления (`@keyframes card-appear` в `styles.css`).

use leptos::prelude::*;
use thaw::Card;

/// Шаг каскадной задержки между соседними карточками
const STAGGER_STEP_MS: u32 = 60;
/// Дальше задержка не растёт, чтобы длинные списки не "проявлялись" секундами
const STAGGER_MAX_MS: u32 = 480;

/// Задержка появления карточки по её позиции в списке
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS).min(STAGGER_MAX_MS)
}

#[component]
pub fn CardAnimated(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "item-card".to_string()
    } else {
        format!("item-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
