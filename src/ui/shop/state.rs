//! State for the cart and wishlist.

use crate::catalog::{Product, ProductId};
use crate::ui::mvi::UiState;
use std::collections::BTreeMap;

/// A product in the cart together with how many of it.
///
/// `qty` is never zero while the entry is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product: Product,
    pub qty: u32,
}

/// Cart and wishlist, keyed by product id. The two maps are independent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopState {
    pub cart: BTreeMap<ProductId, CartEntry>,
    pub wishlist: BTreeMap<ProductId, Product>,
}

impl UiState for ShopState {}

impl ShopState {
    pub fn cart_entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.cart.values()
    }

    pub fn wishlist_items(&self) -> impl Iterator<Item = &Product> {
        self.wishlist.values()
    }

    pub fn in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.contains_key(id)
    }

    /// Quantity in the cart, zero when absent.
    pub fn cart_qty(&self, id: &ProductId) -> u32 {
        self.cart.get(id).map_or(0, |entry| entry.qty)
    }

    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    pub fn wishlist_len(&self) -> usize {
        self.wishlist.len()
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn is_wishlist_empty(&self) -> bool {
        self.wishlist.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let state = ShopState::default();
        assert!(state.is_cart_empty());
        assert!(state.is_wishlist_empty());
    }

    #[test]
    fn cart_qty_is_zero_when_absent() {
        let mut state = ShopState::default();
        let product = Product::new("1", "T-Shirt", 499);
        assert_eq!(state.cart_qty(&product.id), 0);

        state.cart.insert(
            product.id.clone(),
            CartEntry {
                product: product.clone(),
                qty: 3,
            },
        );
        assert_eq!(state.cart_qty(&product.id), 3);
        assert!(!state.in_wishlist(&product.id));
    }
}
