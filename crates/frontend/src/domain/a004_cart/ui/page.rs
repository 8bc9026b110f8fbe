use super::footer::CartFooter;
use crate::domain::a002_address::state::KeyedAddress;
use crate::domain::a002_address::ui::delivery_sheet::delivery_summary;
use crate::domain::a002_address::ui::DeliveryAddressSheet;
use crate::domain::a004_cart::CartContext;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::components::ui::Button;
use crate::shared::components::EmptyState;
use crate::shared::network_error::NetworkErrorHandler;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

#[component]
pub fn CartPage(cart: CartContext, auth: AuthContext, errors: NetworkErrorHandler) -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let sheet_open = RwSignal::new(false);

    let delivery_key = Signal::derive(move || {
        cart.state
            .with(|s| s.delivery_address.as_ref().map(|a| a.key.clone()))
    });
    let checkout_disabled = Signal::derive(move || !cart.state.with(|s| s.can_checkout()));

    let on_checkout = Callback::new(move |_: ()| {
        let delivery = cart
            .state
            .with_untracked(|s| s.delivery_address.as_ref().map(|a| a.address.clone()));
        match delivery {
            Some(selected_address) => nav.navigate(Screen::BillingAddress { selected_address }),
            None => sheet_open.set(true),
        }
    });

    let lines = move || {
        cart.state
            .with(|s| s.items.clone())
            .into_iter()
            .map(|item| {
                let id = item.id.clone();
                view! {
                    <div class="cart-line">
                        <div class="cart-line__name">{item.name.clone()}</div>
                        <div class="cart-line__price">
                            {item.price.map(|p| format!("₹{:.2}", p))}
                        </div>
                        <Button
                            variant="ghost"
                            on_click=Callback::new(move |_| cart.remove(&id))
                        >
                            "Remove"
                        </Button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="cart">
            {move || {
                if cart.state.with(|s| s.items.is_empty()) {
                    view! { <EmptyState message="Your cart is empty" /> }.into_any()
                } else {
                    view! {
                        <div class="cart__lines">{lines}</div>
                        <div class="cart__total">
                            "Total: "
                            {move || format!("₹{:.2}", cart.state.with(|s| s.total()))}
                        </div>
                        <div class="cart__delivery">
                            <span>
                                {move || cart.state.with(|s| {
                                    delivery_summary(s.delivery_address.as_ref().map(|a| &a.address))
                                })}
                            </span>
                            <Button
                                variant="outline"
                                on_click=Callback::new(move |_| sheet_open.set(true))
                            >
                                "Change"
                            </Button>
                        </div>
                        <CartFooter disabled=checkout_disabled on_checkout=on_checkout />
                    }
                    .into_any()
                }
            }}
            <DeliveryAddressSheet
                open=sheet_open
                auth=auth
                errors=errors
                selected_key=delivery_key
                on_select=Callback::new(move |address: KeyedAddress| cart.set_delivery_address(address))
            />
        </div>
    }
}
