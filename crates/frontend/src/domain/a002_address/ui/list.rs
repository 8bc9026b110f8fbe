use super::card::{AddressCard, AddressCardSkeleton};
use crate::domain::a002_address::state::{AddressListState, AddressRow, KeyedAddress};
use crate::shared::components::EmptyState;
use leptos::prelude::*;

/// Address list: skeleton while loading, cards, or the empty message.
///
/// Rows are keyed by address content, so a re-fetch returning the same
/// addresses keeps the existing cards mounted.
#[component]
pub fn AddressList(
    #[prop(into)]
    state: Signal<AddressListState>,
    /// Key of the highlighted card
    #[prop(into)]
    selected_key: Signal<Option<String>>,
    on_select: Callback<KeyedAddress>,
    #[prop(into)]
    empty_message: String,
) -> impl IntoView {
    view! {
        <div class="address-list">
            {move || state.with(|s| s.is_empty()).then(|| {
                view! { <EmptyState message=empty_message.clone() /> }
            })}
            <For
                each=move || state.with(|s| s.rows())
                key=|row| row.key()
                children=move |row| match row {
                    AddressRow::Skeleton(_) => view! { <AddressCardSkeleton /> }.into_any(),
                    AddressRow::Card(item) => {
                        let key = item.key.clone();
                        let selected = Signal::derive(move || {
                            selected_key.with(|k| k.as_deref() == Some(key.as_str()))
                        });
                        view! {
                            <AddressCard item=item selected=selected on_select=on_select />
                        }
                        .into_any()
                    }
                }
            />
        </div>
    }
}
