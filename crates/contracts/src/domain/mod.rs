pub mod a001_filter_criteria;
pub mod a002_address;
pub mod a003_product;
