use crate::domain::a002_address::CheckoutAddresses;
use contracts::domain::a002_address::aggregate::Address;
use leptos::prelude::*;

fn address_block(title: &'static str, address: &Address) -> impl IntoView {
    let name = address.display_name();
    let line = address.one_line();
    let phone = address.phone.clone();
    view! {
        <div class="confirmation__block">
            <h3 class="confirmation__heading">{title}</h3>
            <div class="confirmation__name">{name}</div>
            <div class="confirmation__line">{line}</div>
            {phone.map(|p| view! { <div class="confirmation__line">{p}</div> })}
        </div>
    }
}

/// Order summary with the delivery and billing addresses
#[component]
pub fn ConfirmationPage(addresses: CheckoutAddresses) -> impl IntoView {
    view! {
        <div class="confirmation">
            {address_block("Delivery address", &addresses.selected_address)}
            {address_block("Billing address", &addresses.selected_billing_address)}
        </div>
    }
}
