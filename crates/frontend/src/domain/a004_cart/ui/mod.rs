pub mod confirmation;
pub mod footer;
pub mod page;

pub use confirmation::ConfirmationPage;
pub use footer::CartFooter;
pub use page::CartPage;
