//! Product detail screen state and order placement
//!
//! The detail screen holds a quantity selector and places orders through an
//! in-memory monotonically increasing id sequence. Persisting the last
//! order id across sessions is a storage concern outside this crate.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::info;

use crate::catalog::Product;

/// Quantity selector bounds on the detail screen
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=20;

/// A placed order
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: u64,
    pub product: Product,
    pub quantity: u32,
}

impl Order {
    pub fn total_price(&self) -> i64 {
        self.product.price * self.quantity as i64
    }
}

/// Monotonically increasing order id source
#[derive(Debug)]
pub struct OrderSequence {
    next_id: u64,
}

impl OrderSequence {
    /// Start the sequence after the given last-used id
    pub fn new(last_id: u64) -> Self {
        Self {
            next_id: last_id + 1,
        }
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new(0)
    }
}

/// State behind the product detail screen: the product being shown and the
/// selected quantity
#[derive(Debug)]
pub struct DetailScreen {
    product: Product,
    quantity: u32,
}

impl DetailScreen {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: *QUANTITY_RANGE.start(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(*QUANTITY_RANGE.end());
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity = (self.quantity - 1).max(*QUANTITY_RANGE.start());
    }

    /// Running total shown next to the order button
    pub fn total_price(&self) -> i64 {
        self.product.price * self.quantity as i64
    }

    /// Place an order for the current selection. The caller owns what
    /// happens next (confirmation popup, submission); this only produces
    /// the order record.
    pub fn place_order(&self, sequence: &mut OrderSequence) -> Order {
        let order = Order {
            id: sequence.next(),
            product: self.product.clone(),
            quantity: self.quantity,
        };
        info!(
            order_id = order.id,
            product = %order.product.name,
            quantity = order.quantity,
            total = order.total_price(),
            "order placed"
        );
        order
    }
}
