//! Cart aggregate and its persisted line unit.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// One selected product and how many of it.
///
/// This is the persisted unit: the durable storage entry is a JSON array of
/// exactly this shape, `{"id": string, "qty": number}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// SKU of the selected product.
    pub id: ProductId,
    /// How many units. Always >= 1.
    pub qty: u32,
}

impl CartLine {
    /// Create a line, clamping the quantity to at least 1.
    #[must_use]
    pub fn new(id: ProductId, qty: u32) -> Self {
        Self { id, qty: qty.max(1) }
    }
}

/// An insertion-ordered sequence of cart lines with unique product ids.
///
/// The cart itself is a dumb aggregate: uniqueness and the `qty >= 1`
/// invariant are maintained by the store's mutation primitives, which are the
/// only sanctioned way to produce a modified cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a cart from lines. Callers are responsible for id uniqueness.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consumes the cart and returns its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// True when no lines are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines - what the badge shows.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    /// Quantity of the given product, or `None` if it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| &line.id == id)
            .map(|line| line.qty)
    }

    /// True when a line for the given product exists.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.quantity_of(id).is_some()
    }
}
