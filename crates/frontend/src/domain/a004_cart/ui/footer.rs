use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// Checkout bar under the cart lines
#[component]
pub fn CartFooter(
    #[prop(into)]
    disabled: Signal<bool>,
    on_checkout: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="cart-footer">
            <Button
                class="cart-footer__checkout"
                disabled=disabled
                on_click=Callback::new(move |_| on_checkout.run(()))
            >
                "Checkout"
            </Button>
        </div>
    }
}
