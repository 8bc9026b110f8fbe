pub mod sort_method;
