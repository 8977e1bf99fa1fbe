//! Cart render projection.
//!
//! The store never builds markup or terminal output itself. After every
//! mutation it projects the cart into a [`CartView`] and hands it to the
//! injected [`CartRenderer`]; how that data becomes pixels is the
//! renderer's business.

use medisync_core::Price;

/// Cart item display data for render targets.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemView {
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

/// Cart display data for render targets.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Per-line views in cart insertion order.
    pub items: Vec<CartItemView>,
    pub total_price: Price,
    pub total_quantity: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_price: Price::ZERO,
            total_quantity: 0,
        }
    }
}

/// Format a money amount as a two-decimal price string.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("${:.2}", price.amount().round_dp(2))
}

/// Render target notified after every successful cart mutation and once
/// when the store loads.
pub trait CartRenderer {
    fn render(&mut self, view: &CartView);
}

/// Renderer that discards every view, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl CartRenderer for NullRenderer {
    fn render(&mut self, _view: &CartView) {}
}
