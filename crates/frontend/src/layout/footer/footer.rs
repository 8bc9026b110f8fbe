use crate::domain::a004_cart::CartContext;
use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Bottom tab bar; the cart tab carries the item count
#[component]
pub fn Footer(cart: CartContext) -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <footer data-zone="footer" class="tab-bar">
            {Tab::all()
                .iter()
                .copied()
                .map(|tab| {
                    let active = move || nav.stack.with(|s| s.tab() == tab);
                    view! {
                        <button
                            class="tab-bar__item"
                            class:tab-bar__item--active=active
                            on:click=move |_| nav.switch_tab(tab)
                        >
                            {icon(tab.icon())}
                            <span class="tab-bar__label">{tab.label()}</span>
                            {(tab == Tab::Cart).then(|| view! {
                                {move || {
                                    let count = cart.count();
                                    (count > 0).then(|| view! { <span class="badge">{count}</span> })
                                }}
                            })}
                        </button>
                    }
                })
                .collect_view()}
        </footer>
    }
}
