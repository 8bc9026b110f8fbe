pub mod a001_filters;
pub mod a002_address;
pub mod a003_product;
pub mod a004_cart;
pub mod a005_more;
