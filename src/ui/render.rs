use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, pane_regions};
use crate::ui::views::{CartView, ProductListView, WishlistView};
use ratatui::Frame;

/// Full re-render from the current state.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.shop()), header);

    let [products, cart, wishlist] = pane_regions(body);
    frame.render_widget(ProductListView::widget(app, products), products);
    frame.render_widget(CartView::widget(app, cart), cart);
    frame.render_widget(WishlistView::widget(app, wishlist), wishlist);

    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);
}
