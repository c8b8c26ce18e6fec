//! casekompass Core - Shared types library.
//!
//! This crate provides the common types used across the casekompass cart
//! components:
//! - `cart` - The client-side cart subsystem (store, pricing, view-models)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no UI
//! concerns. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, email addresses, cart lines, and the
//!   static catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
