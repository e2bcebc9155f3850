//! Intents for the shop state.

use crate::catalog::{Product, ProductId};
use crate::ui::mvi::Intent;

/// The six shop transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopIntent {
    /// Insert with quantity 1, or bump the quantity of an existing entry.
    AddToCart { product: Product },
    RemoveFromCart { id: ProductId },
    IncreaseQty { id: ProductId },
    /// Drops the entry once its quantity reaches zero.
    DecreaseQty { id: ProductId },
    /// Insert or overwrite.
    AddToWishlist { product: Product },
    RemoveFromWishlist { id: ProductId },
}

impl Intent for ShopIntent {}

impl ShopIntent {
    /// Stable transition name used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddToCart { .. } => "add_to_cart",
            Self::RemoveFromCart { .. } => "remove_from_cart",
            Self::IncreaseQty { .. } => "increase_qty",
            Self::DecreaseQty { .. } => "decrease_qty",
            Self::AddToWishlist { .. } => "add_to_wishlist",
            Self::RemoveFromWishlist { .. } => "remove_from_wishlist",
        }
    }

    /// Product id the transition targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            Self::AddToCart { product } | Self::AddToWishlist { product } => &product.id,
            Self::RemoveFromCart { id }
            | Self::IncreaseQty { id }
            | Self::DecreaseQty { id }
            | Self::RemoveFromWishlist { id } => id,
        }
    }
}
