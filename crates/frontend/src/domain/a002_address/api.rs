use super::state::AddressListState;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::get_json_with_bearer;
use crate::shared::config::{BILLING_ADDRESS_PATH, DELIVERY_ADDRESS_PATH};
use crate::shared::network_error::NetworkErrorHandler;
use crate::system::auth::AuthContext;
use contracts::domain::a002_address::aggregate::Address;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Which saved address list to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressBook {
    Billing,
    Delivery,
}

impl AddressBook {
    pub fn path(&self) -> &'static str {
        match self {
            AddressBook::Billing => BILLING_ADDRESS_PATH,
            AddressBook::Delivery => DELIVERY_ADDRESS_PATH,
        }
    }
}

pub async fn fetch_address_list(book: AddressBook, token: &str) -> Result<Vec<Address>, ApiError> {
    get_json_with_bearer::<Vec<Address>>(book.path(), token).await
}

/// Fetch `book` into `state`, tagged so that only the latest call lands
pub fn load_addresses(
    book: AddressBook,
    state: RwSignal<AddressListState>,
    auth: AuthContext,
    errors: NetworkErrorHandler,
) {
    let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
        return;
    };
    log::debug!("Loading {:?} addresses", book);

    spawn_local(async move {
        let result = match auth.token() {
            Some(token) => fetch_address_list(book, &token).await,
            None => Err(ApiError::Unauthorized),
        };
        if let Ok(list) = &result {
            log::debug!("{:?} addresses received: {}", book, list.len());
        }
        // The screen may have been left meanwhile; its state is gone then.
        let _ = state.try_update(|s| s.resolve(ticket, result, &errors));
    });
}
