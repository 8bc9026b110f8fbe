pub mod api;
pub mod state;
pub mod ui;

pub use state::CheckoutAddresses;
