pub mod location_denied_alert;
pub mod state;

use crate::domain::a001_filters::ui::Filters;
use crate::domain::a001_filters::{FilterAction, FilterCriteriaStore, SelectionState};
use crate::domain::a003_product::api::search_products;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::EmptyState;
use crate::shared::icons::icon;
use crate::shared::network_error::NetworkErrorHandler;
use contracts::domain::a003_product::aggregate::ProductItem;
use contracts::enums::sort_method::SortMethod;
use contracts::usecases::u501_product_search::ProductQuery;
use leptos::prelude::*;
use location_denied_alert::LocationDeniedAlert;
use state::{ProductListState, SearchTrigger};
use thaw::Spinner;
use wasm_bindgen_futures::spawn_local;

/// Run a search and land the result in `state` and `store`
fn run_search(
    trigger: SearchTrigger,
    query: ProductQuery,
    state: RwSignal<ProductListState>,
    store: FilterCriteriaStore,
    errors: NetworkErrorHandler,
) {
    let Some(ticket) = state.try_update(|s| s.begin_search(trigger)) else {
        return;
    };
    log::debug!("Product search ({:?}): {:?}", trigger, query);

    spawn_local(async move {
        let result = search_products(&query).await;
        let criteria = state
            .try_update(|s| s.finish_search(ticket, result, &errors))
            .flatten();
        if let Some(criteria) = criteria {
            store.replace(criteria);
        }
    });
}

#[component]
fn ProductCard(item: ProductItem) -> impl IntoView {
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let name = item.name.clone();
    let provider = item.provider_name.clone();
    let price = item.price;

    view! {
        <div
            class="product-card"
            on:click=move |_| nav.navigate(Screen::ProductDetails(item.clone()))
        >
            <div class="product-card__name">{name}</div>
            {provider.map(|p| view! { <div class="product-card__provider">{p}</div> })}
            {price.map(|p| view! { <div class="product-card__price">{format!("₹{:.2}", p)}</div> })}
        </div>
    }
}

/// Catalog screen: sort, filters sheet, results and the delivery area.
#[component]
pub fn ProductList(store: FilterCriteriaStore, errors: NetworkErrorHandler) -> impl IntoView {
    let state = RwSignal::new(ProductListState::default());
    let selection = RwSignal::new(SelectionState::default());
    let pincode_text = RwSignal::new(String::new());
    let pincode_invalid = RwSignal::new(false);

    let search = move |trigger: SearchTrigger, query: ProductQuery| {
        run_search(trigger, query, state, store, errors);
    };

    let current_query = move || {
        let criteria = store.criteria.get_untracked();
        selection.with_untracked(|sel| state.with_untracked(|s| s.query(sel, &criteria)))
    };

    search(SearchTrigger::Load, current_query());

    let on_action = Callback::new(move |action: FilterAction| match action {
        FilterAction::Apply { sort, selection: applied } => {
            let criteria = store.criteria.get_untracked();
            state.update(|s| s.sort = sort);
            let query = state.with_untracked(|s| s.query(&applied, &criteria));
            search(SearchTrigger::Apply, query);
        }
        FilterAction::Clear { sort } => {
            let criteria = store.criteria.get_untracked();
            selection.update(|s| s.reset(&criteria));
            state.update(|s| s.sort = sort);
            let query = state.with_untracked(|s| s.cleared_query());
            search(SearchTrigger::Clear, query);
        }
    });

    let on_sort = move |code: String| {
        let Some(sort) = SortMethod::from_code(&code) else {
            return;
        };
        state.update(|s| s.sort = sort);
        search(SearchTrigger::Sort, current_query());
    };

    let save_pincode = Callback::new(move |_: leptos::ev::MouseEvent| {
        let text = pincode_text.get_untracked();
        let saved = state.try_update(|s| s.set_pincode(&text)).unwrap_or(false);
        pincode_invalid.set(!saved);
        if saved {
            search(SearchTrigger::Load, current_query());
        }
    });

    let sort_method = Signal::derive(move || state.with(|s| s.sort));
    let api_in_progress = Signal::derive(move || state.with(|s| s.api_in_progress));
    let clear_in_progress = Signal::derive(move || state.with(|s| s.clear_in_progress));
    let alert_visible = Signal::derive(move || state.with(|s| s.location_alert_visible()));
    let active_filters = move || {
        let count = store
            .criteria
            .with(|c| selection.with(|s| s.active_count(c)));
        (count > 0).then(|| view! { <span class="badge">{count}</span> })
    };

    view! {
        <div class="product-list">
            <div class="product-list__toolbar">
                <button
                    class="product-list__location"
                    on:click=move |_| state.update(|s| s.open_location_sheet())
                >
                    {move || state.with(|s| s.pincode.clone()).unwrap_or_else(|| "Set location".to_string())}
                </button>
                <select
                    class="product-list__sort"
                    on:change=move |ev| on_sort(event_target_value(&ev))
                >
                    {SortMethod::all()
                        .into_iter()
                        .map(|method| view! {
                            <option
                                value=method.code()
                                selected=move || sort_method.get() == method
                            >
                                {method.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <Button
                    variant="outline"
                    on_click=Callback::new(move |_| state.update(|s| s.filters_open = true))
                >
                    {icon("filter")}
                    " Filters "
                    {active_filters}
                </Button>
            </div>

            <div class="product-list__items">
                {move || {
                    let (loading, items) = state.with(|s| (s.loading, s.items.clone()));
                    if items.is_empty() && loading {
                        view! { <div class="product-list__loading"><Spinner /></div> }.into_any()
                    } else if items.is_empty() {
                        view! { <EmptyState message="No products found" /> }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| view! { <ProductCard item=item /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <div
                class="sheet"
                style:display=move || if state.with(|s| s.filters_open) { "flex" } else { "none" }
            >
                <div class="sheet__content">
                    <Filters
                        store=store
                        selection=selection
                        sort_method=sort_method
                        api_in_progress=api_in_progress
                        clear_in_progress=clear_in_progress
                        on_close=Callback::new(move |_| state.update(|s| s.filters_open = false))
                        on_action=on_action
                    />
                </div>
            </div>

            <div
                class="sheet"
                style:display=move || if state.with(|s| s.location_sheet_open) { "flex" } else { "none" }
            >
                <div class="sheet__content">
                    <h3 class="sheet__title">"Delivery location"</h3>
                    <Input
                        label="Pincode"
                        placeholder="6-digit pincode"
                        input_mode="numeric"
                        value=pincode_text
                        on_input=Callback::new(move |text: String| pincode_text.set(text))
                    />
                    {move || pincode_invalid.get().then(|| view! {
                        <div class="form__error">"Enter a valid 6-digit pincode"</div>
                    })}
                    <Button on_click=save_pincode>"Save"</Button>
                </div>
            </div>

            <LocationDeniedAlert
                is_visible=alert_visible
                on_enter_location=Callback::new(move |_| state.update(|s| s.open_location_sheet()))
            />
        </div>
    }
}
