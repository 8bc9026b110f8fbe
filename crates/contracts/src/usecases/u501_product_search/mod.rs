pub mod request;
pub mod response;

pub use request::ProductQuery;
pub use response::ProductSearchResponse;
