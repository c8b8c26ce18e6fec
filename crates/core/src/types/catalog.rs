//! Static product catalog.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// One purchasable download package.
///
/// Entries are defined once at startup and never mutated. Prices are end
/// consumer prices incl. VAT (as provided).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable SKU key.
    pub id: ProductId,
    /// Display name shown in cart rows and the order mail.
    pub name: String,
    /// Unit price incl. VAT.
    pub price: Price,
    /// Relative URL of the package detail page.
    pub url: String,
}

/// Read-only lookup of product id to catalog entry.
///
/// The entry count is small and fixed, so lookup is a linear scan over the
/// insertion-ordered entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries. Later duplicates of an id shadow nothing;
    /// the first match wins on lookup.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Look up an entry by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// True when the id names a known product.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// All entries, in definition order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The casekompass download packages.
    ///
    /// For the Pro Toolkit we model two SKUs (Privat / Pro).
    #[must_use]
    pub fn casekompass() -> Self {
        Self::new(vec![
            CatalogEntry {
                id: ProductId::new("startklar"),
                name: "Startklar – Soforthilfe & Orientierung".to_owned(),
                price: Price::from_cents(2490),
                url: "/paket-startklar.html".to_owned(),
            },
            CatalogEntry {
                id: ProductId::new("care-plan"),
                name: "Care-Plan – Struktur für 4–8 Wochen".to_owned(),
                price: Price::from_cents(6990),
                url: "/paket-care-plan.html".to_owned(),
            },
            CatalogEntry {
                id: ProductId::new("pro-toolkit-privat"),
                name: "Pro Toolkit – Vorlagenbibliothek & System (Privat)".to_owned(),
                price: Price::from_cents(16900),
                url: "/paket-pro-toolkit.html".to_owned(),
            },
            CatalogEntry {
                id: ProductId::new("pro-toolkit-pro"),
                name: "Pro Toolkit – Vorlagenbibliothek & System (Pro/Lizenz)".to_owned(),
                price: Price::from_cents(29900),
                url: "/paket-pro-toolkit.html".to_owned(),
            },
        ])
    }
}
