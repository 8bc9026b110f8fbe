use crate::domain::a002_address::CheckoutAddresses;
use contracts::domain::a002_address::aggregate::Address;
use contracts::domain::a003_product::aggregate::ProductItem;
use leptos::prelude::*;

/// Every screen the app can show, with the data handed to it
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    ProductList,
    ProductDetails(ProductItem),
    Cart,
    BillingAddress { selected_address: Address },
    Confirmation(CheckoutAddresses),
    More,
    Profile,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::ProductList => "Products",
            Screen::ProductDetails(_) => "Product",
            Screen::Cart => "Cart",
            Screen::BillingAddress { .. } => "Billing Address",
            Screen::Confirmation(_) => "Order Summary",
            Screen::More => "More",
            Screen::Profile => "Profile",
        }
    }
}

/// Bottom bar tabs; each owns a stack rooted at one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Products,
    Cart,
    More,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Products, Tab::Cart, Tab::More]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Products => "Products",
            Tab::Cart => "Cart",
            Tab::More => "More",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Products => "products",
            Tab::Cart => "cart",
            Tab::More => "more",
        }
    }

    pub fn root(&self) -> Screen {
        match self {
            Tab::Products => Screen::ProductList,
            Tab::Cart => Screen::Cart,
            Tab::More => Screen::More,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
    pub id: u64,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq)]
struct TabStack {
    tab: Tab,
    entries: Vec<StackEntry>,
}

/// One screen stack per visited tab, root first.
///
/// Every entry of every stack stays mounted; an entry is focused while it
/// is on top of the active tab's stack. Switching tabs only changes which
/// stack is active. Ids are never reused, so a screen pushed twice mounts
/// twice.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack {
    active: Tab,
    stacks: Vec<TabStack>,
    next_id: u64,
}

impl NavigationStack {
    pub fn new(tab: Tab) -> Self {
        let mut stack = Self {
            active: tab,
            stacks: Vec::new(),
            next_id: 0,
        };
        stack.open_tab(tab);
        stack
    }

    fn next_entry(&mut self, screen: Screen) -> StackEntry {
        let id = self.next_id;
        self.next_id += 1;
        StackEntry { id, screen }
    }

    /// Create the stack of `tab` with its root unless it exists
    fn open_tab(&mut self, tab: Tab) {
        if self.stacks.iter().any(|s| s.tab == tab) {
            return;
        }
        let root = self.next_entry(tab.root());
        self.stacks.push(TabStack {
            tab,
            entries: vec![root],
        });
    }

    fn active_stack(&self) -> Option<&TabStack> {
        self.stacks.iter().find(|s| s.tab == self.active)
    }

    fn active_stack_mut(&mut self) -> Option<&mut TabStack> {
        let active = self.active;
        self.stacks.iter_mut().find(|s| s.tab == active)
    }

    pub fn tab(&self) -> Tab {
        self.active
    }

    /// Screens of the active tab, root first
    pub fn entries(&self) -> &[StackEntry] {
        self.active_stack().map(|s| s.entries.as_slice()).unwrap_or(&[])
    }

    /// Screens of all visited tabs; what stays mounted
    pub fn all_entries(&self) -> Vec<StackEntry> {
        self.stacks
            .iter()
            .flat_map(|s| s.entries.iter().cloned())
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.entries().len()
    }

    pub fn current(&self) -> Option<&StackEntry> {
        self.entries().last()
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.current().map(|e| e.id == id).unwrap_or(false)
    }

    /// Push onto the active tab's stack
    pub fn push(&mut self, screen: Screen) -> u64 {
        let entry = self.next_entry(screen);
        let id = entry.id;
        if let Some(stack) = self.active_stack_mut() {
            stack.entries.push(entry);
        }
        id
    }

    /// Drop the top screen. The tab root is never popped.
    pub fn pop(&mut self) -> bool {
        match self.active_stack_mut() {
            Some(stack) if stack.entries.len() > 1 => {
                stack.entries.pop();
                true
            }
            _ => false,
        }
    }

    /// Make `tab` active. Its stack is kept as it was left; selecting the
    /// tab that is already active goes back to its root.
    pub fn switch(&mut self, tab: Tab) {
        if tab == self.active {
            if let Some(stack) = self.active_stack_mut() {
                stack.entries.truncate(1);
            }
            return;
        }
        self.active = tab;
        self.open_tab(tab);
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub stack: RwSignal<NavigationStack>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(NavigationStack::new(Tab::Products)),
        }
    }

    pub fn navigate(&self, screen: Screen) {
        log::info!("navigate: {}", screen.title());
        self.stack.update(|s| {
            s.push(screen);
        });
    }

    pub fn go_back(&self) {
        self.stack.update(|s| {
            if s.pop() {
                log::info!("go_back: depth {}", s.depth());
            }
        });
    }

    pub fn switch_tab(&self, tab: Tab) {
        log::info!("switch_tab: {}", tab.label());
        self.stack.update(|s| s.switch(tab));
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.with(|s| s.depth() > 1)
    }

    pub fn title(&self) -> &'static str {
        self.stack
            .with(|s| s.current().map(|e| e.screen.title()).unwrap_or_default())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_holds_tab_root() {
        let stack = NavigationStack::new(Tab::Cart);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().map(|e| &e.screen), Some(&Screen::Cart));
    }

    #[test]
    fn test_push_moves_focus_to_new_screen() {
        let mut stack = NavigationStack::new(Tab::Products);
        let root = stack.current().map(|e| e.id).unwrap();
        let details = stack.push(Screen::Profile);

        assert!(stack.is_top(details));
        assert!(!stack.is_top(root));

        assert!(stack.pop());
        assert!(stack.is_top(root));
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = NavigationStack::new(Tab::More);
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = NavigationStack::new(Tab::Products);
        let first = stack.push(Screen::Cart);
        stack.pop();
        let second = stack.push(Screen::Cart);
        assert_ne!(first, second);
    }

    #[test]
    fn test_switch_keeps_other_tab_stack() {
        let mut stack = NavigationStack::new(Tab::Products);
        let product_root = stack.current().map(|e| e.id).unwrap();

        stack.switch(Tab::Cart);
        assert_eq!(stack.tab(), Tab::Cart);
        assert_eq!(stack.current().map(|e| &e.screen), Some(&Screen::Cart));
        assert!(!stack.is_top(product_root));

        stack.switch(Tab::Products);
        assert_eq!(stack.current().map(|e| e.id), Some(product_root));
        assert!(stack.is_top(product_root));
        assert_eq!(stack.all_entries().len(), 2);
    }

    #[test]
    fn test_switch_back_restores_pushed_screens() {
        let mut stack = NavigationStack::new(Tab::Products);
        let details = stack.push(Screen::Profile);

        stack.switch(Tab::More);
        stack.switch(Tab::Products);

        assert_eq!(stack.depth(), 2);
        assert!(stack.is_top(details));
    }

    #[test]
    fn test_reselecting_active_tab_pops_to_root() {
        let mut stack = NavigationStack::new(Tab::Cart);
        let root = stack.current().map(|e| e.id).unwrap();
        stack.push(Screen::More);
        stack.push(Screen::Profile);

        stack.switch(Tab::Cart);

        assert_eq!(stack.depth(), 1);
        assert!(stack.is_top(root));
    }
}
