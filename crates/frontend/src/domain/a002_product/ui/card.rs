use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::format::format_price;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn ProductCard(product: Product, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let Product {
        name,
        description,
        price,
        location,
        seller_name,
        category,
        ..
    } = product;

    view! {
        <CardAnimated class="product-card" delay_ms=delay_ms>
            <div class="product-card__header">
                <h3 class="product-card__name">{name}</h3>
                {category.map(|category| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {category}
                    </Badge>
                })}
            </div>
            <p class="product-card__description">{description}</p>
            <div class="product-card__price">{format_price(price)}</div>
            <div class="product-card__meta">
                <span class="product-card__location">
                    {icon("map-pin")}
                    {location.name}
                </span>
                <span class="product-card__seller">"Seller: " {seller_name}</span>
            </div>
        </CardAnimated>
    }
}
