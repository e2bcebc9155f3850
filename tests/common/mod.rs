//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopcart::catalog::{Catalog, Product, ProductId};
use shopcart::ui::app::App;

pub fn tshirt() -> Product {
    Product::new("1", "T-Shirt", 499)
}

pub fn sneakers() -> Product {
    Product::new("2", "Sneakers", 2499)
}

pub fn id(raw: &str) -> ProductId {
    ProductId::from(raw)
}

pub fn make_app() -> App {
    App::new(Catalog::builtin(), "₹")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
