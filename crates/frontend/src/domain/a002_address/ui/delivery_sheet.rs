use super::list::AddressList;
use crate::domain::a002_address::api::{load_addresses, AddressBook};
use crate::domain::a002_address::state::{fetch_on_focus, AddressListState, KeyedAddress};
use crate::shared::components::ui::Button;
use crate::shared::network_error::NetworkErrorHandler;
use crate::system::auth::AuthContext;
use contracts::domain::a002_address::aggregate::Address;
use leptos::prelude::*;

/// Bottom sheet listing saved delivery addresses; loads on every open.
#[component]
pub fn DeliveryAddressSheet(
    open: RwSignal<bool>,
    auth: AuthContext,
    errors: NetworkErrorHandler,
    #[prop(into)]
    selected_key: Signal<Option<String>>,
    on_select: Callback<KeyedAddress>,
) -> impl IntoView {
    let list_state = RwSignal::new(AddressListState::default());

    Effect::new(move |previous: Option<bool>| {
        let visible = open.get();
        if fetch_on_focus(previous, visible) {
            load_addresses(AddressBook::Delivery, list_state, auth, errors);
        }
        visible
    });

    let pick = Callback::new(move |item: KeyedAddress| {
        on_select.run(item);
        open.set(false);
    });

    view! {
        <div class="sheet" style:display=move || if open.get() { "flex" } else { "none" }>
            <div class="sheet__backdrop" on:click=move |_| open.set(false)></div>
            <div class="sheet__content">
                <div class="sheet__header">
                    <h3 class="sheet__title">"Delivery Address"</h3>
                    <Button variant="ghost" on_click=Callback::new(move |_| open.set(false))>
                        "Close"
                    </Button>
                </div>
                <AddressList
                    state=list_state
                    selected_key=selected_key
                    on_select=pick
                    empty_message="No delivery addresses saved"
                />
            </div>
        </div>
    }
}

/// Summary line for the address currently chosen for delivery
pub fn delivery_summary(address: Option<&Address>) -> String {
    match address {
        Some(address) => {
            let line = address.one_line();
            if line.is_empty() {
                address.display_name()
            } else {
                format!("{}, {}", address.display_name(), line)
            }
        }
        None => "Select a delivery address".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_summary_prompts_when_unset() {
        assert_eq!(delivery_summary(None), "Select a delivery address");
        let home = Address::named("Home");
        assert_eq!(delivery_summary(Some(&home)), "Home");
    }
}
