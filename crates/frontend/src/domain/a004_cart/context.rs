use crate::domain::a002_address::state::KeyedAddress;
use contracts::domain::a003_product::aggregate::ProductItem;
use leptos::prelude::*;

/// Cart lines plus the address the order is delivered to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<ProductItem>,
    pub delivery_address: Option<KeyedAddress>,
}

impl CartState {
    /// Add `item` once; a second add of the same id is ignored
    pub fn add(&mut self, item: ProductItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn total(&self) -> f64 {
        self.items.iter().filter_map(|i| i.price).sum()
    }

    pub fn can_checkout(&self) -> bool {
        !self.items.is_empty() && self.delivery_address.is_some()
    }
}

/// Cart shared by the product, cart and checkout screens
#[derive(Clone, Copy)]
pub struct CartContext {
    pub state: RwSignal<CartState>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CartState::default()),
        }
    }

    pub fn add(&self, item: ProductItem) {
        let name = item.name.clone();
        self.state.update(|s| {
            if s.add(item) {
                log::info!("Added to cart: {}", name);
            }
        });
    }

    pub fn remove(&self, id: &str) {
        self.state.update(|s| s.remove(id));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.with(|s| s.contains(id))
    }

    pub fn count(&self) -> usize {
        self.state.with(|s| s.items.len())
    }

    pub fn set_delivery_address(&self, address: KeyedAddress) {
        self.state.update(|s| s.delivery_address = Some(address));
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_address::state::key_addresses;
    use contracts::domain::a002_address::aggregate::Address;

    fn item(id: &str, price: f64) -> ProductItem {
        ProductItem {
            id: id.to_string(),
            name: id.to_string(),
            price: Some(price),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let mut cart = CartState::default();
        assert!(cart.add(item("rice", 120.0)));
        assert!(!cart.add(item("rice", 120.0)));
        assert!(cart.add(item("dal", 80.5)));
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total(), 200.5);

        cart.remove("rice");
        assert!(!cart.contains("rice"));
    }

    #[test]
    fn test_checkout_needs_items_and_address() {
        let mut cart = CartState::default();
        cart.delivery_address = key_addresses(vec![Address::named("Home")]).pop();
        assert!(!cart.can_checkout());

        cart.add(item("rice", 120.0));
        assert!(cart.can_checkout());

        cart.delivery_address = None;
        assert!(!cart.can_checkout());
    }
}
