use contracts::domain::a001_region::Region;
use contracts::domain::a002_product::ProductListingDraft;
use contracts::shared::fixture::Catalog;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, MessageBar, MessageBarIntent, Textarea};

use crate::domain::a001_region::ui::picker::projection::MapFrame;
use crate::domain::a001_region::ui::picker::RegionPicker;
use crate::shared::config::AppConfig;
use crate::shared::state::SelectionStore;

/// Форма нового объявления. Регион выбирается на карте без переключения:
/// повторный клик по выбранному региону его не снимает.
#[component]
#[allow(non_snake_case)]
pub fn ProductListingForm(catalog: &'static Catalog) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let location = SelectionStore::new("listing");
    provide_context(location);
    let selected_location = location.selected_region();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);

    let frame = MapFrame::nepal(config.map.width, config.map.height);

    let submit = move || {
        let draft = ProductListingDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            location: selected_location.get_untracked(),
        };

        match draft.validate() {
            Ok(()) => {
                match serde_json::to_string(&draft) {
                    Ok(json) => log::info!("Listing draft submitted: {}", json),
                    Err(e) => log::warn!("Failed to serialize listing draft: {}", e),
                }
                outcome.set(draft.confirmation().map(Ok));
                name.set(String::new());
                description.set(String::new());
                price.set(String::new());
                location.clear();
            }
            Err(message) => {
                log::debug!("Listing draft rejected: {}", message);
                outcome.set(Some(Err(message)));
            }
        }
    };

    view! {
        <div class="page page--listing">
            <div class="listing-form card">
                <h2 class="listing-form__title">"Create Product Listing"</h2>

                {move || outcome.get().map(|result| match result {
                    Ok(message) => view! {
                        <MessageBar intent=MessageBarIntent::Success>{message}</MessageBar>
                    }.into_any(),
                    Err(message) => view! {
                        <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                    }.into_any(),
                })}

                <div class="form__group">
                    <label class="form__label">"Product Name"</label>
                    <Input value=name placeholder="e.g. Handmade Pashmina Shawl" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Description"</label>
                    <Textarea value=description placeholder="Describe your product" attr:rows=4 />
                </div>

                <div class="form__group">
                    <label class="form__label">"Price (Rs.)"</label>
                    <Input value=price placeholder="e.g. 2500" />
                </div>

                <div class="form__group">
                    <label class="form__label">"Location"</label>
                    <p class="listing-form__location">
                        {move || selected_location
                            .get()
                            .map(|r| r.name)
                            .unwrap_or_else(|| "No location selected".to_string())}
                    </p>
                </div>

                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                    "Create Listing"
                </Button>
            </div>

            <RegionPicker
                registry=&catalog.regions
                selected=selected_location
                on_select={move |region: Option<Region>| location.assign(region)}
                title="Select product location"
                frame=frame
                marker_radius=config.map.marker_radius
            />
        </div>
    }
}
