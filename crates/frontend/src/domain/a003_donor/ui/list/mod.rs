use contracts::domain::a001_region::Region;
use contracts::domain::a003_donor::Donor;
use contracts::shared::fixture::Catalog;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_region::ui::picker::projection::MapFrame;
use crate::domain::a001_region::ui::picker::RegionPicker;
use crate::domain::a003_donor::ui::card::DonorCard;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::filter_chip::FilterChip;
use crate::shared::config::AppConfig;
use crate::shared::format::{count_label, list_heading};
use crate::shared::state::{CatalogViewModel, SelectionStore};

#[component]
#[allow(non_snake_case)]
pub fn DonorList(catalog: &'static Catalog) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let selection = SelectionStore::new("donors");
    provide_context(selection);

    let vm = CatalogViewModel::<Donor>::new(&catalog.donors, selection);
    let frame = MapFrame::nepal(config.map.width, config.map.height);
    let show_list = RwSignal::new(config.list.show_donors_list);

    let heading = move || {
        vm.selected_region
            .with(|r| list_heading("Donors", r.as_ref().map(|r| r.name.as_str())))
    };
    let found = move || vm.filtered.with(|items| count_label(items.len(), "donor"));

    let empty_message = move || match vm.selected_region.get() {
        Some(region) => format!("No donors available from {} yet.", region.name),
        None => "No donors available.".to_string(),
    };

    let toggle_label = move || {
        if show_list.get() {
            "Hide Donors List"
        } else {
            "Show Donors List"
        }
    };

    view! {
        <div class="page page--donors">
            <RegionPicker
                registry=&catalog.regions
                selected=selection.selected_region()
                on_select={move |region: Option<Region>| selection.select_region(region)}
                counts=vm.counts()
                title="Find blood donors near you"
                frame=frame
                marker_radius=config.map.marker_radius
            />

            <section class="catalog">
                <div class="catalog__header">
                    <h2 class="catalog__title">{heading}</h2>
                    <FilterChip />
                    <span class="catalog__count">{found}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| show_list.update(|v| *v = !*v)
                    >
                        {toggle_label}
                    </Button>
                </div>

                <Show when=move || show_list.get()>
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
                                        "Show All Donors"
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
                                    .map(|(index, donor)| view! {
                                        <DonorCard donor=donor delay_ms=stagger_delay(index) />
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
