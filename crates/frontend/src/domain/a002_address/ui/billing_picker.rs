use super::list::AddressList;
use crate::domain::a002_address::api::{load_addresses, AddressBook};
use crate::domain::a002_address::state::{
    fetch_on_focus, AddressListState, BillingSelection, KeyedAddress,
};
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::network_error::NetworkErrorHandler;
use crate::system::auth::AuthContext;
use contracts::domain::a002_address::aggregate::Address;
use leptos::prelude::*;

/// Billing address step of checkout.
///
/// The list is re-fetched every time the screen comes back on top, so an
/// address added elsewhere shows up without a reload.
#[component]
pub fn BillingAddressPicker(
    /// Delivery address chosen in the cart
    selected_address: Address,
    auth: AuthContext,
    errors: NetworkErrorHandler,
    #[prop(into)]
    is_focused: Signal<bool>,
) -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let list_state = RwSignal::new(AddressListState::default());
    let selection = RwSignal::new(BillingSelection::default());

    Effect::new(move |previous: Option<bool>| {
        let focused = is_focused.get();
        if fetch_on_focus(previous, focused) {
            load_addresses(AddressBook::Billing, list_state, auth, errors);
        }
        focused
    });

    let selected_key = Signal::derive(move || selection.with(|s| s.selected_key()));
    let same_as_delivery = Signal::derive(move || selection.with(|s| s.same_as_delivery));
    let can_proceed = move || selection.with(|s| s.can_proceed());

    let on_select = Callback::new(move |item: KeyedAddress| {
        selection.update(|s| s.selected = Some(item));
    });
    let on_toggle_same = Callback::new(move |checked: bool| {
        selection.update(|s| s.same_as_delivery = checked);
    });
    let on_next = Callback::new(move |_: leptos::ev::MouseEvent| {
        let resolved = selection.with_untracked(|s| s.resolve(&selected_address));
        if let Some(addresses) = resolved {
            nav.navigate(Screen::Confirmation(addresses));
        }
    });

    view! {
        <div class="billing-picker">
            <h2 class="billing-picker__title">"Billing Address"</h2>
            <div class="billing-picker__list">
                <AddressList
                    state=list_state
                    selected_key=selected_key
                    on_select=on_select
                    empty_message="No addresses found"
                />
            </div>
            <div class="billing-picker__footer">
                <Checkbox
                    id="same-as-delivery"
                    label="Same as delivery address"
                    checked=same_as_delivery
                    on_change=on_toggle_same
                />
                {move || can_proceed().then(|| view! {
                    <Button on_click=on_next>"Next"</Button>
                })}
            </div>
        </div>
    }
}
