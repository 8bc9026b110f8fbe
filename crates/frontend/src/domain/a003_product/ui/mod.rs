pub mod details;
pub mod list;

pub use details::ProductDetailsPage;
pub use list::ProductList;
