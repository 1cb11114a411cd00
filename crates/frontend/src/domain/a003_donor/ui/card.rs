use contracts::domain::a003_donor::Donor;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::format::format_donation_date;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn DonorCard(donor: Donor, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let availability_color = if donor.availability.is_available_now() {
        BadgeColor::Success
    } else {
        BadgeColor::Warning
    };

    view! {
        <CardAnimated class="donor-card" delay_ms=delay_ms>
            <div class="donor-card__header">
                <h3 class="donor-card__name">{donor.name}</h3>
                <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                    {icon("droplet")}
                    {donor.blood_group.as_str()}
                </Badge>
            </div>
            <div class="donor-card__row">
                {icon("map-pin")}
                <span>{donor.location.name}</span>
            </div>
            <div class="donor-card__row">
                <span class="donor-card__label">"Last donation: "</span>
                <span>{format_donation_date(donor.last_donation)}</span>
            </div>
            <div class="donor-card__row">
                <Badge appearance=BadgeAppearance::Tint color=availability_color>
                    {donor.availability.to_string()}
                </Badge>
            </div>
            <a class="donor-card__contact" href=format!("tel:{}", donor.contact)>
                {donor.contact.clone()}
            </a>
        </CardAnimated>
    }
}
