pub mod footer;
pub mod global_context;
pub mod header;

use crate::domain::a004_cart::CartContext;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +----------------------+
/// |        Header        |
/// +----------------------+
/// |   screen on top of   |
/// |   the active stack   |
/// +----------------------+
/// |     Footer (tabs)    |
/// +----------------------+
/// ```
#[component]
pub fn Shell<C>(cart: CartContext, center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">{center()}</main>
            <footer::Footer cart=cart />
        </div>
    }
}
