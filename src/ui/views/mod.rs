//! The three shop views. Each one only reads `App`.

mod cart;
mod product_list;
mod wishlist;

pub use cart::CartView;
pub use product_list::ProductListView;
pub use wishlist::WishlistView;

use crate::ui::app::{App, Pane};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// First row to draw so that `selected` stays inside a window of
/// `visible_rows` rows.
pub fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(visible_rows)
}

/// Wrap rows in a titled pane, highlighting the selected row when focused.
///
/// `area` is the full pane including borders; rows scroll so the selection
/// is always drawn.
fn pane_widget<'a>(
    app: &App,
    pane: Pane,
    area: Rect,
    rows: Vec<Line<'a>>,
    empty: &'a str,
) -> Paragraph<'a> {
    let focused = app.focus() == pane;
    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(
            pane.title(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        return Paragraph::new(Line::from(Span::styled(
            empty,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
    }

    let selected = app.selection(pane);
    let visible_rows = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(selected, visible_rows);
    let lines: Vec<Line<'a>> = rows
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(idx, line)| {
            if focused && idx == selected {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    Paragraph::new(lines).block(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_while_selection_fits() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
    }

    #[test]
    fn offset_keeps_selection_on_last_visible_row() {
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(29, 13), 17);
    }

    #[test]
    fn zero_height_pane_starts_at_selection() {
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
