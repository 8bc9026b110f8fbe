pub mod state;
pub mod store;
pub mod ui;

pub use state::{FilterAction, SelectionState};
pub use store::FilterCriteriaStore;
