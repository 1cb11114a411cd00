use contracts::domain::a001_region::Region;
use contracts::domain::a002_product::Product;
use contracts::shared::fixture::Catalog;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_region::ui::picker::projection::MapFrame;
use crate::domain::a001_region::ui::picker::RegionPicker;
use crate::domain::a002_product::ui::card::ProductCard;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::filter_chip::FilterChip;
use crate::shared::config::AppConfig;
use crate::shared::format::{count_label, list_heading};
use crate::shared::state::{CatalogViewModel, SelectionStore};

/// Страница товаров: карта регионов + отфильтрованная сетка карточек
#[component]
#[allow(non_snake_case)]
pub fn ProductList(catalog: &'static Catalog) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let selection = SelectionStore::new("products");
    provide_context(selection);

    let vm = CatalogViewModel::<Product>::new(&catalog.products, selection);
    let frame = MapFrame::nepal(config.map.width, config.map.height);

    let heading = move || {
        vm.selected_region
            .with(|r| list_heading("Products", r.as_ref().map(|r| r.name.as_str())))
    };
    let found = move || vm.filtered.with(|items| count_label(items.len(), "product"));

    let empty_message = move || match vm.selected_region.get() {
        Some(region) => format!("No products available from {} yet.", region.name),
        None => "No products available.".to_string(),
    };

    view! {
        <div class="page page--products">
            <RegionPicker
                registry=&catalog.regions
                selected=selection.selected_region()
                on_select={move |region: Option<Region>| selection.select_region(region)}
                counts=vm.counts()
                title="Select a region to filter products"
                frame=frame
                marker_radius=config.map.marker_radius
            />

            <section class="catalog">
                <div class="catalog__header">
                    <h2 class="catalog__title">{heading}</h2>
                    <FilterChip />
                    <span class="catalog__count">{found}</span>
                </div>

                <Show
                    when=move || vm.filtered.with(|items| !items.is_empty())
                    fallback=move || view! {
                        <div class="catalog__empty">
                            <p>{empty_message}</p>
                            <Show when=move || vm.selected_region.with(|r| r.is_some())>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| selection.clear()
                                >
                                    "Show All Products"
                                </Button>
                            </Show>
                        </div>
                    }
                >
                    <div class="catalog__grid">
                        {move || {
                            vm.filtered
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, product)| view! {
                                    <ProductCard product=product delay_ms=stagger_delay(index) />
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </section>
        </div>
    }
}
