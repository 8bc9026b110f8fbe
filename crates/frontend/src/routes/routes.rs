use crate::domain::a001_filters::FilterCriteriaStore;
use crate::domain::a002_address::ui::BillingAddressPicker;
use crate::domain::a003_product::ui::{ProductDetailsPage, ProductList};
use crate::domain::a004_cart::ui::{CartPage, ConfirmationPage};
use crate::domain::a004_cart::CartContext;
use crate::domain::a005_more::ui::{MoreMenu, ProfilePage};
use crate::layout::global_context::{AppGlobalContext, Screen, StackEntry};
use crate::layout::Shell;
use crate::shared::network_error::NetworkErrorHandler;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

/// Objects created by the app root and handed to the screens
#[derive(Clone, Copy)]
pub struct AppServices {
    pub auth: AuthContext,
    pub errors: NetworkErrorHandler,
    pub criteria: FilterCriteriaStore,
    pub cart: CartContext,
}

fn render_screen(screen: Screen, services: AppServices, is_focused: Signal<bool>) -> AnyView {
    let AppServices {
        auth,
        errors,
        criteria,
        cart,
    } = services;

    match screen {
        Screen::ProductList => view! { <ProductList store=criteria errors=errors /> }.into_any(),
        Screen::ProductDetails(item) => {
            view! { <ProductDetailsPage item=item cart=cart /> }.into_any()
        }
        Screen::Cart => view! { <CartPage cart=cart auth=auth errors=errors /> }.into_any(),
        Screen::BillingAddress { selected_address } => view! {
            <BillingAddressPicker
                selected_address=selected_address
                auth=auth
                errors=errors
                is_focused=is_focused
            />
        }
        .into_any(),
        Screen::Confirmation(addresses) => {
            view! { <ConfirmationPage addresses=addresses /> }.into_any()
        }
        Screen::More => view! { <MoreMenu auth=auth /> }.into_any(),
        Screen::Profile => view! { <ProfilePage auth=auth /> }.into_any(),
    }
}

/// Stacks of all visited tabs. Every entry stays mounted; only the top of
/// the active tab is shown.
#[component]
pub fn AppRoutes(services: AppServices) -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            cart=services.cart
            center=move || {
                view! {
                    <For
                        each=move || nav.stack.with(|s| s.all_entries())
                        key=|entry| entry.id
                        children=move |entry: StackEntry| {
                            let id = entry.id;
                            let is_focused = Signal::derive(move || nav.stack.with(|s| s.is_top(id)));
                            view! {
                                <div
                                    class="screen"
                                    style:display=move || if is_focused.get() { "block" } else { "none" }
                                >
                                    {render_screen(entry.screen, services, is_focused)}
                                </div>
                            }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}
