use crate::domain::a002_address::state::KeyedAddress;
use leptos::prelude::*;

/// Selectable address card
#[component]
pub fn AddressCard(
    item: KeyedAddress,
    #[prop(into)]
    selected: Signal<bool>,
    on_select: Callback<KeyedAddress>,
) -> impl IntoView {
    let name = item.address.display_name();
    let line = item.address.one_line();
    let email = item.address.email.clone();
    let phone = item.address.phone.clone();

    view! {
        <div
            class="address-card"
            class:address-card--selected=move || selected.get()
            on:click=move |_| on_select.run(item.clone())
        >
            <input
                type="radio"
                class="address-card__radio"
                prop:checked=move || selected.get()
            />
            <div class="address-card__body">
                <div class="address-card__name">{name}</div>
                <div class="address-card__line">{line}</div>
                {email.map(|e| view! { <div class="address-card__contact">{e}</div> })}
                {phone.map(|p| view! { <div class="address-card__contact">{p}</div> })}
            </div>
        </div>
    }
}

/// Grey placeholder with the shape of an [`AddressCard`]
#[component]
pub fn AddressCardSkeleton() -> impl IntoView {
    view! {
        <div class="address-card address-card--skeleton" aria-hidden="true">
            <div class="skeleton skeleton--circle"></div>
            <div class="address-card__body">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
            </div>
        </div>
    }
}
