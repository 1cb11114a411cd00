pub mod projection;

use std::collections::BTreeMap;

use contracts::domain::a001_region::{Region, RegionId, RegionKind, RegionRegistry, RegionShape};
use leptos::prelude::*;

use self::projection::MapFrame;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};

/// Выбор региона на карте.
///
/// Провинции рисуются контурами, города маркерами. Каждый клик по региону
/// вызывает `on_select(Some(region))` ровно один раз, кнопка "Clear"
/// вызывает `on_select(None)`. Политику переключения решает владелец состояния.
/// Выбран ли регион `id`. Сравнение только по ID, как в состоянии выбора.
fn is_region_selected(selected: Option<&Region>, id: &RegionId) -> bool {
    selected.is_some_and(|region| region.id == *id)
}

#[component]
pub fn RegionPicker(
    /// Реестр регионов
    registry: &'static RegionRegistry,
    /// Снимок выбранного региона (подсветка и строка "Showing")
    #[prop(into)]
    selected: Signal<Option<Region>>,
    /// Callback выбора / сброса
    #[prop(into)]
    on_select: Callback<Option<Region>>,
    /// Количество сущностей по регионам (бейджи на маркерах)
    #[prop(optional)]
    counts: BTreeMap<RegionId, usize>,
    /// Заголовок карточки
    #[prop(into)]
    title: String,
    /// Размер карты и радиус маркера
    frame: MapFrame,
    marker_radius: f64,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let is_selected = move |id: &RegionId| selected.with(|s| is_region_selected(s.as_ref(), id));
    let selected_name = move || selected.with(|s| s.as_ref().map(|r| r.name.clone()));

    let provinces = registry
        .regions_of_kind(RegionKind::Province)
        .filter_map(|region| match &region.shape {
            RegionShape::Outline { ring, label_at } => {
                let points = frame.polygon_points(ring);
                let (lx, ly) = frame.project(*label_at);
                let id = region.id.clone();
                let label = region.name.trim_end_matches(" Province").to_string();
                let region = region.clone();
                Some(view! {
                    <g class="region-map__province">
                        <polygon
                            points=points
                            class=move || {
                                if is_selected(&id) {
                                    "region-map__outline region-map__outline--selected"
                                } else {
                                    "region-map__outline"
                                }
                            }
                            on:click=move |_| on_select.run(Some(region.clone()))
                        ></polygon>
                        <text
                            class="region-map__label"
                            x=format!("{:.1}", lx)
                            y=format!("{:.1}", ly)
                        >
                            {label}
                        </text>
                    </g>
                })
            }
            _ => None,
        })
        .collect_view();

    let cities = registry
        .regions_of_kind(RegionKind::City)
        .filter_map(|region| {
            let point = match region.shape {
                RegionShape::Marker(point) => point,
                _ => return None,
            };
            let (x, y) = frame.project(point);
            let count = counts.get(&region.id).copied().unwrap_or(0);
            let id = region.id.clone();
            let region = region.clone();
            let name = region.name.clone();
            Some(view! {
                <g
                    class=move || {
                        if is_selected(&id) {
                            "region-map__city region-map__city--selected"
                        } else {
                            "region-map__city"
                        }
                    }
                    on:click=move |_| on_select.run(Some(region.clone()))
                >
                    <circle cx=format!("{:.1}", x) cy=format!("{:.1}", y) r=marker_radius.to_string()></circle>
                    <text class="region-map__city-name" x=format!("{:.1}", x) y=format!("{:.1}", y + marker_radius + 11.0)>
                        {name}
                    </text>
                    {(count > 0).then(|| view! {
                        <text
                            class="region-map__badge"
                            x=format!("{:.1}", x + marker_radius + 2.0)
                            y=format!("{:.1}", y - marker_radius)
                        >
                            {count}
                        </text>
                    })}
                </g>
            })
        })
        .collect_view();

    let matches = move || {
        registry
            .search_regions_by_name(&query.get())
            .into_iter()
            .cloned()
            .collect::<Vec<Region>>()
    };

    view! {
        <div class="region-picker card">
            <div class="region-picker__header">
                <h3 class="region-picker__title">{title}</h3>
                {move || selected_name().map(|name| view! {
                    <p class="region-picker__current">
                        {icon("map-pin")}
                        " Showing: "
                        <strong>{name}</strong>
                    </p>
                })}
            </div>

            <svg class="region-map" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                {provinces}
                {cities}
            </svg>

            <div class="region-picker__toolbar">
                <SearchInput
                    value=query
                    on_change=move |value: String| set_query.set(value)
                    placeholder="Search regions..."
                />
                <Show when=move || selected.with(|s| s.is_some())>
                    <button class="button button--ghost" on:click=move |_| on_select.run(None)>
                        "Clear"
                    </button>
                </Show>
            </div>

            <ul class="region-picker__list">
                <For
                    each=matches
                    key=|region| region.id.clone()
                    children=move |region: Region| {
                        let id = region.id.clone();
                        let name = region.name.clone();
                        let kind = region.kind.display_name();
                        view! {
                            <li
                                class=move || {
                                    if is_selected(&id) {
                                        "region-picker__item region-picker__item--selected"
                                    } else {
                                        "region-picker__item"
                                    }
                                }
                                on:click=move |_| on_select.run(Some(region.clone()))
                            >
                                <span class="region-picker__name">
                                    {move || highlight_matches(&name, &query.get())}
                                </span>
                                <span class="region-picker__kind">{kind}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || matches().is_empty()>
                <p class="region-picker__empty">"No regions match your search."</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_matches_by_id_only() {
        let snapshot = Region::new("Lo Manthang", RegionKind::City, RegionShape::Unplaced);
        let renamed = Region::new("lo manthang", RegionKind::District, RegionShape::Unplaced);

        assert!(is_region_selected(Some(&snapshot), &renamed.id));
        assert!(!is_region_selected(Some(&snapshot), &RegionId::from_name("Pokhara")));
        assert!(!is_region_selected(None, &snapshot.id));
    }
}
