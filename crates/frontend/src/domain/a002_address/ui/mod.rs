pub mod billing_picker;
pub mod card;
pub mod delivery_sheet;
pub mod list;

pub use billing_picker::BillingAddressPicker;
pub use delivery_sheet::DeliveryAddressSheet;
