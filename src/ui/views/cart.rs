use super::pane_widget;
use crate::ui::app::{App, Pane};
use crate::ui::theme::{HEADER_TEXT, PRICE_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct CartView;

impl CartView {
    pub fn widget(app: &App, area: Rect) -> Paragraph<'static> {
        let rows = app
            .shop()
            .cart_entries()
            .map(|entry| {
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(entry.product.title.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::raw(" - "),
                    Span::styled(
                        app.price_label(&entry.product),
                        Style::default().fg(PRICE_TEXT),
                    ),
                    Span::styled(format!(" × {}", entry.qty), Style::default().fg(HEADER_TEXT)),
                ])
            })
            .collect();

        pane_widget(app, Pane::Cart, area, rows, "No items in cart")
    }
}
