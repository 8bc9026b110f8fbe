pub mod option;
pub mod ui;

pub use option::MoreOption;
