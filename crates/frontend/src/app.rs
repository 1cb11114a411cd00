use anyhow::Context;
use contracts::shared::fixture::{catalog, Catalog};
use leptos::prelude::*;

use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a002_product::ui::listing_form::ProductListingForm;
use crate::domain::a003_donor::ui::list::DonorList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::{load_config, AppConfig, Page};
use crate::shared::theme::ThemeProvider;

fn load_catalog() -> anyhow::Result<&'static Catalog> {
    catalog()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load embedded catalog fixtures")
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load configuration, using defaults: {:#}", e);
        AppConfig::default()
    });
    let ctx = AppGlobalContext::new(config.app.default_page);
    let title = config.app.title.clone();

    // Provide the stores to the whole app via context.
    provide_context(config);
    provide_context(ctx);

    let center = move || match load_catalog() {
        Ok(catalog) => match ctx.page.get() {
            Page::Products => view! { <ProductList catalog=catalog /> }.into_any(),
            Page::Donors => view! { <DonorList catalog=catalog /> }.into_any(),
            Page::NewListing => view! { <ProductListingForm catalog=catalog /> }.into_any(),
        },
        Err(e) => {
            log::error!("{:#}", e);
            view! {
                <div class="error-banner">
                    <strong>"Data could not be loaded. "</strong>
                    <span>{format!("{:#}", e)}</span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <ThemeProvider>
            <Shell title=title center=center />
        </ThemeProvider>
    }
}
