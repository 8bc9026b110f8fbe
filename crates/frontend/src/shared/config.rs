//! Runtime configuration of the frontend.
//!
//! The API base is taken from the `SHOP_API_BASE` variable at build time when
//! set, otherwise it is derived from the page location with the backend port.

/// Port the catalog/cart server listens on next to the static bundle
pub const BACKEND_PORT: u16 = 3000;

/// Saved billing addresses of the signed-in user
pub const BILLING_ADDRESS_PATH: &str = "/api/clientApis/v1/billing_details";

/// Saved delivery addresses of the signed-in user
pub const DELIVERY_ADDRESS_PATH: &str = "/api/clientApis/v1/delivery_address";

/// Product search with filter criteria
pub const PRODUCT_SEARCH_PATH: &str = "/api/products";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base = match option_env!("SHOP_API_BASE") {
            Some(base) if !base.trim().is_empty() => normalize_base(base),
            _ => location_base(),
        };
        Self { api_base }
    }
}

fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
