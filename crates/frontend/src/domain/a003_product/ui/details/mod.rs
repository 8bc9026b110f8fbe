pub mod view_model;

use crate::domain::a004_cart::CartContext;
use crate::shared::components::ui::Button;
use contracts::domain::a003_product::aggregate::ProductItem;
use leptos::prelude::*;
use view_model::{policy_rows, statutory_rows, DetailRow};

fn detail_table(rows: Vec<DetailRow>) -> impl IntoView {
    view! {
        <table class="details__table">
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td class="details__label">{row.label}</td>
                            <td class="details__value">{row.value}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Policy flags and statutory declarations of one product
#[component]
pub fn ProductDetails(item: ProductItem) -> impl IntoView {
    let policy = policy_rows(&item);
    let statutory = statutory_rows(&item);

    view! {
        <div class="details">
            {(!policy.is_empty()).then(|| detail_table(policy))}
            {statutory.map(|rows| view! {
                <div class="details__section">
                    <h3 class="details__heading">"Product details"</h3>
                    {detail_table(rows)}
                </div>
            })}
        </div>
    }
}

#[component]
pub fn ProductDetailsPage(item: ProductItem, cart: CartContext) -> impl IntoView {
    let id = item.id.clone();
    let in_cart = Signal::derive(move || cart.contains(&id));
    let for_cart = item.clone();

    view! {
        <div class="product-page">
            <h2 class="product-page__name">{item.name.clone()}</h2>
            {item.provider_name.clone().map(|p| view! {
                <div class="product-page__provider">{p}</div>
            })}
            {item.price.map(|p| view! {
                <div class="product-page__price">{format!("₹{:.2}", p)}</div>
            })}
            <ProductDetails item=item />
            <div class="product-page__actions">
                <Button
                    disabled=in_cart
                    on_click=Callback::new(move |_| cart.add(for_cart.clone()))
                >
                    {move || if in_cart.get() { "In cart" } else { "Add to cart" }}
                </Button>
            </div>
        </div>
    }
}
