//! casekompass cart subsystem.
//!
//! Maintains a persistent list of selected product SKUs and quantities,
//! recomputes line and grand totals against the static catalog, and derives
//! the view-models every on-page cart indicator renders from (badge counts,
//! cart page line items, checkout summary).
//!
//! # Architecture
//!
//! Data flows one way for reads (store → pricing → view-models) and one way
//! for writes (UI event → store mutation → save → observers → views re-pull
//! from the store). The core is UI-free: renderers are pure functions of
//! `(Cart, Catalog)` producing view-models; a thin adapter in the host UI
//! translates those into widgets and routes events back to the store's glue
//! operations.
//!
//! # Modules
//!
//! - [`config`] - Explicit construction parameters (storage key, operator
//!   address, navigation URLs)
//! - [`storage`] - Durable key-value seam with in-memory and file backends
//! - [`store`] - The [`store::CartStore`]: load/save, pure mutation
//!   primitives, observer list
//! - [`pricing`] - Pure cart x catalog join into priced lines and a grand
//!   total
//! - [`view`] - Badge and cart-page view-models
//! - [`checkout`] - Mailto order draft assembly

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod pricing;
pub mod storage;
pub mod store;
pub mod view;

pub use checkout::{OrderDraft, order_draft};
pub use config::CartConfig;
pub use error::CartError;
pub use pricing::{PricedCart, PricedLine, price};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::CartStore;
pub use view::{
    BadgeView, CartPageView, CartPanelView, CartRowView, CartSummaryView, EmptyCartView,
    badge_view, cart_page_view,
};
