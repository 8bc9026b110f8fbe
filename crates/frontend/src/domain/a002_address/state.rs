//! Address list state for the pickers.
//!
//! A fetch is issued on every focus of the hosting screen. Each fetch gets a
//! request id; only the response to the latest id is applied, so a slow
//! response from an earlier focus cannot overwrite a newer one.

use crate::shared::api_error::ApiError;
use crate::shared::network_error::ApiErrorHandler;
use contracts::domain::a002_address::aggregate::Address;
use std::collections::HashMap;

/// Placeholder cards shown while the real length is unknown
pub const SKELETON_ROWS: usize = 5;

/// Address with the key it is rendered under
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedAddress {
    pub key: String,
    pub address: Address,
}

/// Key every address by content. Identical records in the same list get an
/// occurrence suffix so keys stay unique.
pub fn key_addresses(list: Vec<Address>) -> Vec<KeyedAddress> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    list.into_iter()
        .map(|address| {
            let base = address.content_key();
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let key = if *count == 1 {
                base
            } else {
                format!("{}-{}", base, count)
            };
            KeyedAddress { key, address }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AddressListLoad {
    #[default]
    Idle,
    Loading,
    Populated(Vec<KeyedAddress>),
    Empty,
}

/// One row of the rendered list
#[derive(Debug, Clone, PartialEq)]
pub enum AddressRow {
    Skeleton(usize),
    Card(KeyedAddress),
}

impl AddressRow {
    /// List key: content key for cards, position for placeholders
    pub fn key(&self) -> String {
        match self {
            AddressRow::Skeleton(index) => format!("skeleton-{}", index),
            AddressRow::Card(item) => item.key.clone(),
        }
    }
}

/// Whether a screen should re-fetch, given its focus on the previous run
/// (`None` on the first run) and now. Every gain of focus fetches.
pub fn fetch_on_focus(previous: Option<bool>, focused: bool) -> bool {
    focused && previous != Some(true)
}

/// Issued per fetch; carries the request id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied,
    /// Failure handed to the shared error handler; state untouched
    Delegated,
    /// A newer request was issued meanwhile; response dropped
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressListState {
    latest_request: u64,
    pub load: AddressListLoad,
}

impl AddressListState {
    /// Start a fetch. The first one shows the skeleton; later ones keep
    /// the current list on screen until the response arrives.
    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.latest_request += 1;
        if self.load == AddressListLoad::Idle {
            self.load = AddressListLoad::Loading;
        }
        RequestTicket(self.latest_request)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest_request
    }

    /// Apply a fetch result.
    ///
    /// 404 means the user has no saved addresses and yields an empty list.
    /// Any other error goes to `errors` exactly once.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Address>, ApiError>,
        errors: &dyn ApiErrorHandler,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping address response #{} (latest is #{})",
                ticket.0,
                self.latest_request
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(list) if list.is_empty() => {
                self.load = AddressListLoad::Empty;
                FetchOutcome::Applied
            }
            Ok(list) => {
                self.load = AddressListLoad::Populated(key_addresses(list));
                FetchOutcome::Applied
            }
            Err(error) if error.is_not_found() => {
                self.load = AddressListLoad::Empty;
                FetchOutcome::Applied
            }
            Err(error) => {
                errors.handle_api_error(&error);
                FetchOutcome::Delegated
            }
        }
    }

    pub fn rows(&self) -> Vec<AddressRow> {
        match &self.load {
            AddressListLoad::Idle | AddressListLoad::Loading => {
                (0..SKELETON_ROWS).map(AddressRow::Skeleton).collect()
            }
            AddressListLoad::Populated(list) => list.iter().cloned().map(AddressRow::Card).collect(),
            AddressListLoad::Empty => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.load == AddressListLoad::Empty
    }
}

/// Addresses handed to the order confirmation screen
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutAddresses {
    pub selected_address: Address,
    pub selected_billing_address: Address,
}

/// Choice made on the billing address screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingSelection {
    pub selected: Option<KeyedAddress>,
    pub same_as_delivery: bool,
}

impl BillingSelection {
    pub fn selected_key(&self) -> Option<String> {
        self.selected.as_ref().map(|s| s.key.clone())
    }

    pub fn can_proceed(&self) -> bool {
        self.selected.is_some() || self.same_as_delivery
    }

    /// "Same as delivery" wins over a card picked from the list
    pub fn resolve(&self, delivery: &Address) -> Option<CheckoutAddresses> {
        let billing = if self.same_as_delivery {
            delivery.clone()
        } else {
            self.selected.as_ref()?.address.clone()
        };
        Some(CheckoutAddresses {
            selected_address: delivery.clone(),
            selected_billing_address: billing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHandler {
        calls: RefCell<Vec<ApiError>>,
    }

    impl ApiErrorHandler for RecordingHandler {
        fn handle_api_error(&self, error: &ApiError) {
            self.calls.borrow_mut().push(error.clone());
        }
    }

    fn home_and_work() -> Vec<Address> {
        vec![Address::named("Home"), Address::named("Work")]
    }

    #[test]
    fn test_first_fetch_shows_skeleton() {
        let mut state = AddressListState::default();
        assert_eq!(state.rows().len(), SKELETON_ROWS);

        state.begin_fetch();
        assert_eq!(state.load, AddressListLoad::Loading);
        assert!(state
            .rows()
            .iter()
            .all(|r| matches!(r, AddressRow::Skeleton(_))));
    }

    #[test]
    fn test_success_renders_two_distinct_keys() {
        let handler = RecordingHandler::default();
        let mut state = AddressListState::default();
        let ticket = state.begin_fetch();

        let outcome = state.resolve(ticket, Ok(home_and_work()), &handler);

        assert_eq!(outcome, FetchOutcome::Applied);
        let rows = state.rows();
        assert_eq!(rows.len(), 2);
        let keys: Vec<String> = rows
            .iter()
            .filter_map(|r| match r {
                AddressRow::Card(k) => Some(k.key.clone()),
                AddressRow::Skeleton(_) => None,
            })
            .collect();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
        assert!(handler.calls.borrow().is_empty());
    }

    #[test]
    fn test_not_found_is_empty_list_without_delegation() {
        let handler = RecordingHandler::default();
        let mut state = AddressListState::default();
        let ticket = state.begin_fetch();

        let outcome = state.resolve(ticket, Err(ApiError::NotFound), &handler);

        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(state.is_empty());
        assert!(state.rows().is_empty());
        assert!(handler.calls.borrow().is_empty());
    }

    #[test]
    fn test_other_error_is_delegated_once_and_state_kept() {
        let handler = RecordingHandler::default();
        let mut state = AddressListState::default();
        let ticket = state.begin_fetch();
        let before = state.load.clone();

        let outcome = state.resolve(ticket, Err(ApiError::Http { status: 500 }), &handler);

        assert_eq!(outcome, FetchOutcome::Delegated);
        assert_eq!(state.load, before);
        assert_eq!(*handler.calls.borrow(), vec![ApiError::Http { status: 500 }]);
    }

    #[test]
    fn test_error_after_populated_keeps_list() {
        let handler = RecordingHandler::default();
        let mut state = AddressListState::default();
        let first = state.begin_fetch();
        state.resolve(first, Ok(home_and_work()), &handler);
        let populated = state.load.clone();

        let second = state.begin_fetch();
        assert_eq!(state.load, populated);
        state.resolve(second, Err(ApiError::Network("offline".into())), &handler);

        assert_eq!(state.load, populated);
        assert_eq!(handler.calls.borrow().len(), 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let handler = RecordingHandler::default();
        let mut state = AddressListState::default();
        let older = state.begin_fetch();
        let newer = state.begin_fetch();

        let outcome = state.resolve(newer, Ok(vec![Address::named("Work")]), &handler);
        assert_eq!(outcome, FetchOutcome::Applied);

        let outcome = state.resolve(older, Ok(home_and_work()), &handler);
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(state.rows().len(), 1);

        let outcome = state.resolve(older, Err(ApiError::Http { status: 502 }), &handler);
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(handler.calls.borrow().is_empty());
    }

    #[test]
    fn test_fetch_on_every_focus_gain() {
        assert!(fetch_on_focus(None, true));
        assert!(!fetch_on_focus(None, false));
        assert!(!fetch_on_focus(Some(true), true));
        assert!(!fetch_on_focus(Some(true), false));
        assert!(fetch_on_focus(Some(false), true));
    }

    #[test]
    fn test_row_keys() {
        assert_eq!(AddressRow::Skeleton(3).key(), "skeleton-3");
        let card = key_addresses(vec![Address::named("Home")]).pop().unwrap();
        assert_eq!(AddressRow::Card(card.clone()).key(), card.key);
    }

    #[test]
    fn test_keys_are_stable_across_refetch() {
        let first = key_addresses(home_and_work());
        let second = key_addresses(home_and_work());
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_records_get_unique_keys() {
        let keyed = key_addresses(vec![
            Address::named("Home"),
            Address::named("Home"),
            Address::named("Home"),
        ]);
        assert_eq!(keyed[1].key, format!("{}-2", keyed[0].key));
        assert_eq!(keyed[2].key, format!("{}-3", keyed[0].key));
    }

    #[test]
    fn test_next_gated_on_selection_or_checkbox() {
        let mut selection = BillingSelection::default();
        assert!(!selection.can_proceed());

        selection.same_as_delivery = true;
        assert!(selection.can_proceed());

        selection.same_as_delivery = false;
        selection.selected = key_addresses(vec![Address::named("Work")]).pop();
        assert!(selection.can_proceed());
    }

    #[test]
    fn test_same_as_delivery_wins_over_selected_card() {
        let delivery = Address::named("Home");
        let selection = BillingSelection {
            selected: key_addresses(vec![Address::named("Office")]).pop(),
            same_as_delivery: true,
        };

        let resolved = selection.resolve(&delivery).unwrap();
        assert_eq!(resolved.selected_address, delivery);
        assert_eq!(resolved.selected_billing_address, delivery);
    }

    #[test]
    fn test_selected_card_used_without_checkbox() {
        let delivery = Address::named("Home");
        let office = key_addresses(vec![Address::named("Office")]).pop();
        let selection = BillingSelection {
            selected: office.clone(),
            same_as_delivery: false,
        };

        let resolved = selection.resolve(&delivery).unwrap();
        assert_eq!(resolved.selected_billing_address, Address::named("Office"));
        assert_eq!(selection.selected_key(), office.map(|o| o.key));
        assert_eq!(BillingSelection::default().resolve(&delivery), None);
    }
}
