use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::services::Product;

/// Spend thresholds and the discount they unlock, lowest first
pub const DISCOUNT_TIERS: [(f64, u32); 3] = [(100.0, 5), (200.0, 10), (400.0, 15)];

/// Most units of one product a single line can hold
pub const MAX_LINE_QUANTITY: u32 = 999;

/// One product line in the cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Totals shown in the order summary and checkout dialog
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub discount_percentage: u32,
    pub discount: f64,
    pub total: f64,
}

impl CheckoutSummary {
    pub fn for_subtotal(subtotal: f64) -> Self {
        let discount_percentage = DISCOUNT_TIERS
            .iter()
            .rev()
            .find(|(threshold, _)| subtotal >= *threshold)
            .map(|(_, pct)| *pct)
            .unwrap_or(0);
        let discount = subtotal * discount_percentage as f64 / 100.0;

        Self {
            subtotal,
            discount_percentage,
            discount,
            total: subtotal - discount,
        }
    }
}

/// Ordered cart lines
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit; an existing line is incremented
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
        });
    }

    pub fn remove(&mut self, product_id: u32) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Set a line's quantity, clamped to `0..=MAX_LINE_QUANTITY`; a zero line stays
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity.clamp(0, MAX_LINE_QUANTITY as i64) as u32;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().fold(0u32, |total, l| total.saturating_add(l.quantity))
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::for_subtotal(self.total_price())
    }
}

/// Cart handle handed to components through context
#[derive(Clone, Copy, PartialEq)]
pub struct CartStore {
    pub cart: Signal<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            cart: Signal::new(Cart::default()),
        }
    }

    pub fn add_item(&mut self, product: &Product) {
        log::debug!("Adding product {} to cart", product.id);
        self.cart.write().add(product);
    }

    pub fn remove_item(&mut self, product_id: u32) {
        self.cart.write().remove(product_id);
    }

    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        self.cart.write().set_quantity(product_id, quantity);
    }

    pub fn clear(&mut self) {
        self.cart.write().clear();
    }

    pub fn total_items(&self) -> u32 {
        self.cart.read().total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.cart.read().total_price()
    }

    pub fn summary(&self) -> CheckoutSummary {
        self.cart.read().summary()
    }

    /// Mock checkout: returns what was charged and empties the cart
    pub fn checkout(&mut self) -> CheckoutSummary {
        let summary = self.summary();
        log::info!(
            "Checkout confirmed: {} items, total {:.2}",
            self.total_items(),
            summary.total
        );
        self.clear();
        summary
    }
}
