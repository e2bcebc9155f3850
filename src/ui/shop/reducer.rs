//! Reducer for the cart and wishlist.

use crate::ui::mvi::Reducer;

use super::intent::ShopIntent;
use super::state::{CartEntry, ShopState};

/// Reducer for shop state transitions.
///
/// Every intent is total: an id that is not present leaves the state as it
/// was.
pub struct ShopReducer;

impl Reducer for ShopReducer {
    type State = ShopState;
    type Intent = ShopIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShopIntent::AddToCart { product } => {
                state
                    .cart
                    .entry(product.id.clone())
                    .and_modify(|entry| entry.qty = entry.qty.saturating_add(1))
                    .or_insert(CartEntry { product, qty: 1 });
            }

            ShopIntent::RemoveFromCart { id } => {
                state.cart.remove(&id);
            }

            ShopIntent::IncreaseQty { id } => {
                if let Some(entry) = state.cart.get_mut(&id) {
                    entry.qty = entry.qty.saturating_add(1);
                }
            }

            ShopIntent::DecreaseQty { id } => {
                let emptied = match state.cart.get_mut(&id) {
                    Some(entry) => {
                        entry.qty = entry.qty.saturating_sub(1);
                        entry.qty == 0
                    }
                    None => false,
                };
                if emptied {
                    state.cart.remove(&id);
                }
            }

            ShopIntent::AddToWishlist { product } => {
                state.wishlist.insert(product.id.clone(), product);
            }

            ShopIntent::RemoveFromWishlist { id } => {
                state.wishlist.remove(&id);
            }
        }
        state
    }
}
