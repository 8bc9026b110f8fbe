use crate::domain::a001_filters::state::{
    has_active_criteria, show_price_range, FilterAction, SelectionState,
};
use crate::domain::a001_filters::store::FilterCriteriaStore;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::{EmptyState, RangeSlider};
use contracts::domain::a001_filter_criteria::aggregate::FilterOption;
use contracts::enums::sort_method::SortMethod;
use leptos::prelude::*;

/// Price as typed in the inputs: no trailing ".0" for whole numbers
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// DOM id of an option checkbox, so its label toggles it
pub fn option_checkbox_id(is_provider: bool, option_id: &str) -> String {
    let section = if is_provider { "provider" } else { "category" };
    format!("filter-{}-{}", section, option_id)
}

/// Filters sheet: provider/category checkboxes and the price range.
///
/// Selection lives in the host; this view only moves it through
/// [`SelectionState`] and hands apply/clear back via `on_action`.
#[component]
pub fn Filters(
    store: FilterCriteriaStore,
    selection: RwSignal<SelectionState>,
    #[prop(into)]
    sort_method: Signal<SortMethod>,
    #[prop(into)]
    api_in_progress: Signal<bool>,
    #[prop(into)]
    clear_in_progress: Signal<bool>,
    on_close: Callback<()>,
    on_action: Callback<FilterAction>,
) -> impl IntoView {
    let criteria = store.criteria;

    Effect::new(move |_| {
        let current = criteria.get();
        selection.update(|s| s.initialize_from(&current));
    });

    let option_checkbox = move |item: FilterOption, is_provider: bool| {
        let id = item.id.clone();
        let dom_id = option_checkbox_id(is_provider, &item.id);
        let checked = Signal::derive(move || {
            selection.with(|s| {
                if is_provider {
                    s.is_provider_selected(&id)
                } else {
                    s.is_category_selected(&id)
                }
            })
        });
        let label = item.name.clone();
        let on_change = Callback::new(move |_: bool| {
            selection.update(|s| {
                if is_provider {
                    s.toggle_provider(&item)
                } else {
                    s.toggle_category(&item)
                }
            })
        });
        view! {
            <Checkbox id=dom_id label=label checked=checked on_change=on_change />
        }
    };

    let providers_section = move || {
        let providers = criteria.with(|c| c.providers.clone());
        (!providers.is_empty()).then(|| {
            view! {
                <h3 class="filters__section-title">"Providers"</h3>
                {providers
                    .into_iter()
                    .map(|item| option_checkbox(item, true))
                    .collect_view()}
            }
        })
    };

    let categories_section = move || {
        let categories = criteria.with(|c| c.categories.clone());
        (!categories.is_empty()).then(|| {
            view! {
                <h3 class="filters__section-title">"Categories"</h3>
                {categories
                    .into_iter()
                    .map(|item| option_checkbox(item, false))
                    .collect_view()}
            }
        })
    };

    let price_section = move || {
        if !criteria.with(show_price_range) {
            return None;
        }
        let floor = Signal::derive(move || criteria.with(|c| c.min_price.unwrap_or_default()));
        let ceiling = Signal::derive(move || criteria.with(|c| c.max_price.unwrap_or_default()));
        let values = Signal::derive(move || selection.with(|s| [s.min, s.max]));
        let min_text = Signal::derive(move || format_price(selection.with(|s| s.min)));
        let max_text = Signal::derive(move || format_price(selection.with(|s| s.max)));

        Some(view! {
            <h3 class="filters__section-title">"Price range"</h3>
            <div class="filters__price-inputs">
                <Input
                    label="Min"
                    value=min_text
                    input_mode="numeric"
                    on_input=Callback::new(move |text: String| {
                        let current = criteria.get_untracked();
                        selection.update(|s| s.set_min_text(&text, &current));
                    })
                />
                <Input
                    label="Max"
                    value=max_text
                    input_mode="numeric"
                    on_input=Callback::new(move |text: String| {
                        let current = criteria.get_untracked();
                        selection.update(|s| s.set_max_text(&text, &current));
                    })
                />
            </div>
            <RangeSlider
                min=floor
                max=ceiling
                values=values
                on_change=Callback::new(move |range: [f64; 2]| {
                    selection.update(|s| s.set_range(range));
                })
            />
        })
    };

    view! {
        <div class="filters">
            <div class="filters__header">
                <Button variant="ghost" on_click=Callback::new(move |_| on_close.run(()))>
                    "Close"
                </Button>
            </div>
            <hr class="divider" />

            {move || {
                if criteria.with(has_active_criteria) {
                    view! {
                        <div class="filters__body">
                            <div class="filters__scroll">
                                {providers_section}
                                {categories_section}
                                <div class="filters__price">{price_section}</div>
                            </div>
                            <div class="filters__actions">
                                <Button
                                    variant="outline"
                                    loading=clear_in_progress
                                    on_click=Callback::new(move |_| {
                                        let sort = sort_method.get_untracked();
                                        on_action.run(selection.with_untracked(|s| s.clear(sort)));
                                    })
                                >
                                    "Clear"
                                </Button>
                                <Button
                                    variant="outline"
                                    loading=api_in_progress
                                    on_click=Callback::new(move |_| {
                                        let sort = sort_method.get_untracked();
                                        on_action.run(selection.with_untracked(|s| s.apply(sort)));
                                    })
                                >
                                    "Apply"
                                </Button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <EmptyState message="No filters available for these products" />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
