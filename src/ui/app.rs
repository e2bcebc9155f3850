use crate::catalog::{Catalog, Product};
use crate::ui::mvi::Reducer;
use crate::ui::shop::{ShopIntent, ShopReducer, ShopState};

/// The three views, in focus-cycling order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Products,
    Cart,
    Wishlist,
}

impl Pane {
    pub const ALL: [Pane; 3] = [Pane::Products, Pane::Cart, Pane::Wishlist];

    pub fn next(self) -> Self {
        match self {
            Pane::Products => Pane::Cart,
            Pane::Cart => Pane::Wishlist,
            Pane::Wishlist => Pane::Products,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Products => Pane::Wishlist,
            Pane::Cart => Pane::Products,
            Pane::Wishlist => Pane::Cart,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pane::Products => "Products",
            Pane::Cart => "Cart Items",
            Pane::Wishlist => "Wishlist",
        }
    }

    fn index(self) -> usize {
        match self {
            Pane::Products => 0,
            Pane::Cart => 1,
            Pane::Wishlist => 2,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of the shop state and the only place it changes.
///
/// Views borrow `&App` for rendering; key handling goes through
/// [`App::dispatch`].
pub struct App {
    should_quit: bool,
    focus: Pane,
    catalog: Catalog,
    shop: ShopState,
    currency_symbol: String,
    /// Selected row per pane, indexed by `Pane::index`.
    selection: [usize; 3],
    /// Bumped on every transition that changed the state.
    revision: u64,
}

impl App {
    pub fn new(catalog: Catalog, currency_symbol: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Pane::Products,
            catalog,
            shop: ShopState::default(),
            currency_symbol: currency_symbol.into(),
            selection: [0; 3],
            revision: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shop(&self) -> &ShopState {
        &self.shop
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn price_label(&self, product: &Product) -> String {
        product.price.display_with(&self.currency_symbol)
    }

    /// Number of rows the pane currently shows.
    pub fn pane_len(&self, pane: Pane) -> usize {
        match pane {
            Pane::Products => self.catalog.len(),
            Pane::Cart => self.shop.cart_len(),
            Pane::Wishlist => self.shop.wishlist_len(),
        }
    }

    pub fn selection(&self, pane: Pane) -> usize {
        self.selection[pane.index()]
    }

    /// Move the focused pane's selection, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.pane_len(self.focus);
        if len == 0 {
            return;
        }
        let current = self.selection(self.focus) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.selection[self.focus.index()] = next;
    }

    /// Product under the cursor in the focused pane.
    pub fn selected_product(&self) -> Option<&Product> {
        let index = self.selection(self.focus);
        match self.focus {
            Pane::Products => self.catalog.list_products().get(index),
            Pane::Cart => self.shop.cart_entries().nth(index).map(|entry| &entry.product),
            Pane::Wishlist => self.shop.wishlist_items().nth(index),
        }
    }

    /// Apply one transition to the shop state.
    pub fn dispatch(&mut self, intent: ShopIntent) {
        let transition = intent.name();
        let product = intent.product_id().clone();
        let before = self.shop.clone();

        dispatch_mvi!(self, shop, ShopReducer, intent);

        if self.shop != before {
            self.revision += 1;
            tracing::debug!(
                transition,
                product = %product,
                revision = self.revision,
                cart = self.shop.cart_len(),
                wishlist = self.shop.wishlist_len(),
                "Shop state changed"
            );
        } else {
            tracing::trace!(transition, product = %product, "Transition was a no-op");
        }
        self.clamp_selections();
    }

    fn clamp_selections(&mut self) {
        for pane in Pane::ALL {
            let len = self.pane_len(pane);
            let slot = &mut self.selection[pane.index()];
            *slot = (*slot).min(len.saturating_sub(1));
        }
    }
}
