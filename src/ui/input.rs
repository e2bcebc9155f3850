use crate::ui::app::{App, Pane};
use crate::ui::shop::ShopIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.focus_prev();
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
            return;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
            return;
        }
        _ => {}
    }

    if let Some(intent) = intent_for_key(app, key) {
        app.dispatch(intent);
    }
}

/// Translate a key press on the focused pane into a shop transition.
///
/// Reads the state only; nothing is applied here.
pub fn intent_for_key(app: &App, key: KeyEvent) -> Option<ShopIntent> {
    let product = app.selected_product()?;

    match (app.focus(), key.code) {
        (Pane::Products | Pane::Wishlist, KeyCode::Enter | KeyCode::Char('a')) => {
            Some(ShopIntent::AddToCart {
                product: product.clone(),
            })
        }
        (Pane::Products, KeyCode::Char('w')) => {
            if app.shop().in_wishlist(&product.id) {
                Some(ShopIntent::RemoveFromWishlist {
                    id: product.id.clone(),
                })
            } else {
                Some(ShopIntent::AddToWishlist {
                    product: product.clone(),
                })
            }
        }
        (Pane::Cart, KeyCode::Char('+') | KeyCode::Char('=')) => Some(ShopIntent::IncreaseQty {
            id: product.id.clone(),
        }),
        (Pane::Cart, KeyCode::Char('-')) => Some(ShopIntent::DecreaseQty {
            id: product.id.clone(),
        }),
        (Pane::Cart, KeyCode::Char('d') | KeyCode::Delete) => Some(ShopIntent::RemoveFromCart {
            id: product.id.clone(),
        }),
        (Pane::Wishlist, KeyCode::Char('d') | KeyCode::Delete) => {
            Some(ShopIntent::RemoveFromWishlist {
                id: product.id.clone(),
            })
        }
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') || ch.eq_ignore_ascii_case(&'c'));
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}
