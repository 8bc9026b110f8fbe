//! View state of the product list screen.

use crate::domain::a001_filters::SelectionState;
use crate::shared::api_error::ApiError;
use crate::shared::network_error::ApiErrorHandler;
use contracts::domain::a001_filter_criteria::aggregate::FilterCriteria;
use contracts::domain::a003_product::aggregate::ProductItem;
use contracts::enums::sort_method::SortMethod;
use contracts::usecases::u501_product_search::{ProductQuery, ProductSearchResponse};

/// What started a search; decides which button shows a spinner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTrigger {
    Load,
    Sort,
    Apply,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
    trigger: SearchTrigger,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListState {
    pub sort: SortMethod,
    pub items: Vec<ProductItem>,
    pub loading: bool,
    pub api_in_progress: bool,
    pub clear_in_progress: bool,
    pub filters_open: bool,
    pub pincode: Option<String>,
    pub location_sheet_open: bool,
    latest_request: u64,
}

/// Indian postal code: six digits
pub fn parse_pincode(text: &str) -> Option<String> {
    let text = text.trim();
    (text.len() == 6 && text.chars().all(|c| c.is_ascii_digit())).then(|| text.to_string())
}

impl ProductListState {
    pub fn begin_search(&mut self, trigger: SearchTrigger) -> SearchTicket {
        self.latest_request += 1;
        self.loading = true;
        self.api_in_progress = trigger == SearchTrigger::Apply;
        self.clear_in_progress = trigger == SearchTrigger::Clear;
        SearchTicket {
            id: self.latest_request,
            trigger,
        }
    }

    /// Apply a search result. Returns the criteria of the new result set,
    /// which the caller puts into the criteria store.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<ProductSearchResponse, ApiError>,
        errors: &dyn ApiErrorHandler,
    ) -> Option<FilterCriteria> {
        if ticket.id != self.latest_request {
            log::debug!("Dropping product response #{}", ticket.id);
            return None;
        }
        self.loading = false;
        self.api_in_progress = false;
        self.clear_in_progress = false;

        match result {
            Ok(response) => {
                self.items = response.items;
                if matches!(ticket.trigger, SearchTrigger::Apply | SearchTrigger::Clear) {
                    self.filters_open = false;
                }
                Some(response.filters)
            }
            Err(error) => {
                errors.handle_api_error(&error);
                None
            }
        }
    }

    /// Query for the current sort, `selection` and delivery area
    pub fn query(&self, selection: &SelectionState, criteria: &FilterCriteria) -> ProductQuery {
        selection
            .to_query(self.sort, criteria)
            .with_pincode(self.pincode.clone())
    }

    /// Query after the filters were cleared: ordering and area only
    pub fn cleared_query(&self) -> ProductQuery {
        ProductQuery::sorted_by(self.sort).with_pincode(self.pincode.clone())
    }

    pub fn location_alert_visible(&self) -> bool {
        self.pincode.is_none() && !self.location_sheet_open
    }

    pub fn open_location_sheet(&mut self) {
        self.location_sheet_open = true;
    }

    /// Store a valid pincode and close the sheet; false leaves all as is
    pub fn set_pincode(&mut self, text: &str) -> bool {
        match parse_pincode(text) {
            Some(pincode) => {
                self.pincode = Some(pincode);
                self.location_sheet_open = false;
                true
            }
            None => false,
        }
    }
}
