use super::pane_widget;
use crate::ui::app::{App, Pane};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, PRICE_TEXT, WISHLIST_MARK};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct ProductListView;

impl ProductListView {
    pub fn widget(app: &App, area: Rect) -> Paragraph<'static> {
        let products = app.catalog().list_products();
        let title_width = products
            .iter()
            .map(|p| p.title.chars().count())
            .max()
            .unwrap_or(0);

        let rows = products
            .iter()
            .map(|product| {
                let mut spans = vec![
                    Span::raw(" "),
                    Span::styled(
                        format!("{:<width$}", product.title, width = title_width),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::raw("  "),
                    Span::styled(app.price_label(product), Style::default().fg(PRICE_TEXT)),
                ];
                if app.shop().in_wishlist(&product.id) {
                    spans.push(Span::styled("  ♥", Style::default().fg(WISHLIST_MARK)));
                }
                let qty = app.shop().cart_qty(&product.id);
                if qty > 0 {
                    spans.push(Span::styled(
                        format!("  ({} in cart)", qty),
                        Style::default().fg(MUTED_TEXT),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        pane_widget(app, Pane::Products, area, rows, "No products available")
    }
}
