//! Shared type definitions.

pub mod cart;
pub mod catalog;
pub mod email;
pub mod id;
pub mod price;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogEntry};
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::Price;
