use crate::domain::a001_filters::FilterCriteriaStore;
use crate::domain::a004_cart::CartContext;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::{AppRoutes, AppServices};
use crate::shared::network_error::{ErrorBanner, NetworkErrorHandler};
use crate::system::auth::AuthContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation is read through context by the layout and the screens.
    provide_context(AppGlobalContext::new());

    let auth = AuthContext::restore();
    let services = AppServices {
        auth,
        errors: NetworkErrorHandler::new(auth),
        criteria: FilterCriteriaStore::new(),
        cart: CartContext::new(),
    };

    view! {
        <ConfigProvider>
            <ErrorBanner handler=services.errors />
            <AppRoutes services=services />
        </ConfigProvider>
    }
}
