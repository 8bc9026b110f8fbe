pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod network_error;
