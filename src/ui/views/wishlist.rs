use super::pane_widget;
use crate::ui::app::{App, Pane};
use crate::ui::theme::{HEADER_TEXT, PRICE_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct WishlistView;

impl WishlistView {
    pub fn widget(app: &App, area: Rect) -> Paragraph<'static> {
        let rows = app
            .shop()
            .wishlist_items()
            .map(|product| {
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(product.title.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::raw(" - "),
                    Span::styled(app.price_label(product), Style::default().fg(PRICE_TEXT)),
                ])
            })
            .collect();

        pane_widget(app, Pane::Wishlist, area, rows, "No items in wishlist")
    }
}
