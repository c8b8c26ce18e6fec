//! Pricing engine: pure cart x catalog join.

use casekompass_core::{Cart, Catalog, CatalogEntry, Price, ProductId};

/// A cart line joined with its catalog entry and priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    /// SKU of the product.
    pub id: ProductId,
    /// Catalog display name.
    pub name: String,
    /// Detail page URL.
    pub url: String,
    /// Unit price incl. VAT.
    pub unit_price: Price,
    /// How many units.
    pub qty: u32,
    /// `unit_price * qty`, exact.
    pub line_total: Price,
}

/// A fully priced cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedCart {
    /// Priced lines, in cart order. Lines whose id is unknown to the catalog
    /// are excluded.
    pub lines: Vec<PricedLine>,
    /// Exact sum of the unrounded line totals. Rounding happens once, at
    /// display time.
    pub total: Price,
}

impl PricedCart {
    /// True when nothing priced remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Price a cart against a catalog.
///
/// Deterministic and side-effect free; may be called arbitrarily often. Cart
/// lines referencing ids absent from the catalog are silently dropped, which
/// tolerates catalog changes across deploys.
#[must_use]
pub fn price(cart: &Cart, catalog: &Catalog) -> PricedCart {
    let lines: Vec<PricedLine> = cart
        .lines()
        .iter()
        .filter_map(|line| catalog.get(&line.id).map(|entry| price_line(entry, line.qty)))
        .collect();
    let total = lines.iter().map(|line| line.line_total).sum();
    PricedCart { lines, total }
}

fn price_line(entry: &CatalogEntry, qty: u32) -> PricedLine {
    PricedLine {
        id: entry.id.clone(),
        name: entry.name.clone(),
        url: entry.url.clone(),
        unit_price: entry.price,
        qty,
        line_total: entry.price * qty,
    }
}
