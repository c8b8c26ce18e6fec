//! Cart store: the single source of truth for the persisted cart.
//!
//! All mutation primitives are pure (input cart in, new cart out); the only
//! side-effecting operations are [`CartStore::load`] and [`CartStore::save`].
//! Saving synchronously notifies every subscribed observer exactly once, and
//! observers re-derive their view via `load()` rather than receiving a
//! payload - cart sizes are tiny, so consistency beats cleverness here.

use std::cell::RefCell;

use serde_json::Value;
use tracing::{debug, warn};

use casekompass_core::{Cart, CartLine, Catalog, ProductId};

use crate::config::CartConfig;
use crate::error::Result;
use crate::storage::StorageBackend;

/// Parse a user-supplied quantity string.
///
/// The contract is strict: the trimmed input must parse as an unsigned
/// integer. Anything else - `"3abc"`, `"2.5"`, `"-2"`, `""` - falls back to 1,
/// and a parsed 0 is clamped to 1. Never rejects, never errors.
#[must_use]
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

/// Coerce a persisted quantity value, tolerating whatever an old deploy or a
/// hand-edited entry left behind.
fn coerce_stored_qty(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(q) = n.as_u64() {
                u32::try_from(q.max(1)).unwrap_or(u32::MAX)
            } else if let Some(q) = n.as_f64() {
                // Quantities are integral in our model; truncate stray floats.
                if q.is_finite() && q >= 1.0 {
                    let truncated = q.trunc();
                    if truncated >= f64::from(u32::MAX) {
                        u32::MAX
                    } else {
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        {
                            truncated as u32
                        }
                    }
                } else {
                    1
                }
            } else {
                1
            }
        }
        Some(Value::String(s)) => parse_quantity(s),
        _ => 1,
    }
}

/// Decode a persisted payload, dropping anything unusable.
///
/// Missing, malformed, or non-array content yields an empty cart; entries
/// without a string `id` are dropped; quantities are coerced to >= 1.
fn decode_stored(raw: &str) -> Cart {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else {
        warn!("persisted cart is not a JSON array, starting empty");
        return Cart::empty();
    };

    let lines = items
        .iter()
        .filter_map(|item| {
            let id = item.get("id").and_then(Value::as_str)?;
            Some(CartLine::new(
                ProductId::new(id),
                coerce_stored_qty(item.get("qty")),
            ))
        })
        .collect();
    Cart::from_lines(lines)
}

/// The persisted cart's owner.
///
/// Constructed explicitly from a storage backend, a catalog, and a config, so
/// isolated instances (tests, previews) never touch real storage. Mutation
/// primitives never touch storage and never mutate their argument; callers can
/// safely hold a reference to a prior cart.
pub struct CartStore {
    storage: Box<dyn StorageBackend>,
    catalog: Catalog,
    config: CartConfig,
    // Observers must not subscribe or save from within a notification.
    observers: RefCell<Vec<Box<dyn Fn()>>>,
}

impl CartStore {
    /// Create a store over the given backend, catalog, and config.
    pub fn new(
        storage: impl StorageBackend + 'static,
        catalog: Catalog,
        config: CartConfig,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            catalog,
            config,
            observers: RefCell::new(Vec::new()),
        }
    }

    /// The catalog this store validates mutations against.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The store's construction config.
    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Register a zero-payload observer invoked after every successful save.
    pub fn subscribe(&self, observer: impl Fn() + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Read the persisted cart. Never fails: missing or malformed state
    /// recovers silently to an empty cart.
    #[must_use]
    pub fn load(&self) -> Cart {
        self.storage
            .read(&self.config.storage_key)
            .map_or_else(Cart::empty, |raw| decode_stored(&raw))
    }

    /// Serialize and durably write the cart, then notify every observer once.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CartError::Storage`] if the write fails; observers are
    /// not notified in that case.
    pub fn save(&self, cart: &Cart) -> Result<()> {
        let payload = serde_json::to_string(cart).unwrap_or_else(|_| "[]".to_owned());
        self.storage.write(&self.config.storage_key, &payload)?;
        debug!(lines = cart.len(), units = cart.total_quantity(), "cart saved");

        for observer in self.observers.borrow().iter() {
            observer();
        }
        Ok(())
    }

    /// Insert-or-update a line, keyed by product id.
    ///
    /// Unknown product ids are a no-op (the input is returned unchanged). An
    /// existing line's quantity becomes `max(1, old + delta)`; otherwise a new
    /// line is appended with `max(1, delta)`. Never produces a quantity < 1.
    #[must_use]
    pub fn upsert(&self, cart: &Cart, id: &ProductId, delta: i64) -> Cart {
        if !self.catalog.contains(id) {
            return cart.clone();
        }

        let mut lines = cart.lines().to_vec();
        if let Some(line) = lines.iter_mut().find(|line| &line.id == id) {
            line.qty = clamp_quantity(i64::from(line.qty) + delta);
        } else {
            lines.push(CartLine::new(id.clone(), clamp_quantity(delta)));
        }
        Cart::from_lines(lines)
    }

    /// Replace a line's quantity with the parsed value of `raw`.
    ///
    /// No-op for product ids the catalog does not know, and for known ids
    /// that are not currently in the cart (it never inserts). Input parsing
    /// follows [`parse_quantity`].
    #[must_use]
    pub fn set_quantity(&self, cart: &Cart, id: &ProductId, raw: &str) -> Cart {
        if !self.catalog.contains(id) {
            return cart.clone();
        }

        let qty = parse_quantity(raw);
        let lines = cart
            .lines()
            .iter()
            .map(|line| {
                if &line.id == id {
                    CartLine::new(line.id.clone(), qty)
                } else {
                    line.clone()
                }
            })
            .collect();
        Cart::from_lines(lines)
    }

    /// Filter out the line with the given product id. Absent ids are a no-op.
    #[must_use]
    pub fn remove(&self, cart: &Cart, id: &ProductId) -> Cart {
        let lines = cart
            .lines()
            .iter()
            .filter(|line| &line.id != id)
            .cloned()
            .collect();
        Cart::from_lines(lines)
    }

    // -------------------------------------------------------------------------
    // Glue operations - what a UI adapter wires to its events
    // -------------------------------------------------------------------------

    /// Add one unit of a product: load, upsert +1, save.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures from [`CartStore::save`].
    pub fn add_one(&self, id: &ProductId) -> Result<Cart> {
        let next = self.upsert(&self.load(), id, 1);
        self.save(&next)?;
        Ok(next)
    }

    /// Apply a quantity input edit: load, set quantity, save.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures from [`CartStore::save`].
    pub fn change_quantity(&self, id: &ProductId, raw: &str) -> Result<Cart> {
        let next = self.set_quantity(&self.load(), id, raw);
        self.save(&next)?;
        Ok(next)
    }

    /// Apply a remove control: load, remove, save.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures from [`CartStore::save`].
    pub fn remove_line(&self, id: &ProductId) -> Result<Cart> {
        let next = self.remove(&self.load(), id);
        self.save(&next)?;
        Ok(next)
    }
}

/// Clamp a signed quantity to the valid `1..=u32::MAX` range.
fn clamp_quantity(qty: i64) -> u32 {
    u32::try_from(qty.clamp(1, i64::from(u32::MAX))).unwrap_or(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> CartStore {
        CartStore::new(
            MemoryStorage::new(),
            Catalog::casekompass(),
            CartConfig::default(),
        )
    }

    fn startklar() -> ProductId {
        ProductId::new("startklar")
    }

    #[test]
    fn test_parse_quantity_strict() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 3 "), 3);
        assert_eq!(parse_quantity("3abc"), 1);
        assert_eq!(parse_quantity("2.5"), 1);
        assert_eq!(parse_quantity("-2"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
    }

    #[test]
    fn test_load_missing_entry_is_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn test_load_tolerates_malformed_payloads() {
        let store = store();
        for raw in ["not json", "{\"id\":\"x\"}", "42", "null", "\"[]\""] {
            store
                .storage
                .write(&store.config.storage_key, raw)
                .unwrap();
            assert!(store.load().is_empty(), "payload {raw:?} should read empty");
        }
    }

    #[test]
    fn test_load_coerces_recovered_lines() {
        let store = store();
        store
            .storage
            .write(
                &store.config.storage_key,
                r#"[
                    {"id":"startklar","qty":0},
                    {"id":"care-plan","qty":-3},
                    {"id":"pro-toolkit-privat","qty":"2"},
                    {"id":"pro-toolkit-pro","qty":2.9},
                    {"qty":5},
                    {"id":7,"qty":5},
                    "garbage"
                ]"#,
            )
            .unwrap();

        let cart = store.load();
        assert_eq!(cart.len(), 4);
        assert_eq!(cart.quantity_of(&startklar()), Some(1));
        assert_eq!(cart.quantity_of(&ProductId::new("care-plan")), Some(1));
        assert_eq!(
            cart.quantity_of(&ProductId::new("pro-toolkit-privat")),
            Some(2)
        );
        assert_eq!(cart.quantity_of(&ProductId::new("pro-toolkit-pro")), Some(2));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = store();
        let cart = store.upsert(
            &store.upsert(&Cart::empty(), &startklar(), 2),
            &ProductId::new("care-plan"),
            1,
        );
        store.save(&cart).unwrap();
        assert_eq!(store.load(), cart);
    }

    #[test]
    fn test_save_notifies_each_observer_once_per_call() {
        let store = store();
        let calls = Rc::new(Cell::new(0));

        let seen = Rc::clone(&calls);
        store.subscribe(move || seen.set(seen.get() + 1));
        let seen = Rc::clone(&calls);
        store.subscribe(move || seen.set(seen.get() + 1));

        store.save(&Cart::empty()).unwrap();
        assert_eq!(calls.get(), 2);
        store.save(&Cart::empty()).unwrap();
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_upsert_appends_then_increments() {
        let store = store();
        let cart = store.upsert(&Cart::empty(), &startklar(), 1);
        assert_eq!(cart.quantity_of(&startklar()), Some(1));

        let cart = store.upsert(&cart, &startklar(), 2);
        assert_eq!(cart.quantity_of(&startklar()), Some(3));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_upsert_unknown_sku_is_noop() {
        let store = store();
        let cart = store.upsert(&Cart::empty(), &startklar(), 1);
        let next = store.upsert(&cart, &ProductId::new("unknown-sku"), 1);
        assert_eq!(next, cart);
    }

    #[test]
    fn test_upsert_twice_equals_once_with_double_delta() {
        let store = store();
        let twice = store.upsert(&store.upsert(&Cart::empty(), &startklar(), 1), &startklar(), 1);
        let once = store.upsert(&Cart::empty(), &startklar(), 2);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_upsert_never_drops_below_one() {
        let store = store();
        let cart = store.upsert(&Cart::empty(), &startklar(), -5);
        assert_eq!(cart.quantity_of(&startklar()), Some(1));

        let cart = store.upsert(&cart, &startklar(), -100);
        assert_eq!(cart.quantity_of(&startklar()), Some(1));
    }

    #[test]
    fn test_upsert_does_not_mutate_input() {
        let store = store();
        let original = store.upsert(&Cart::empty(), &startklar(), 1);
        let _next = store.upsert(&original, &startklar(), 4);
        assert_eq!(original.quantity_of(&startklar()), Some(1));
    }

    #[test]
    fn test_set_quantity_replaces_only_target_line() {
        let store = store();
        let care_plan = ProductId::new("care-plan");
        let cart = store.upsert(&store.upsert(&Cart::empty(), &startklar(), 1), &care_plan, 2);

        let cart = store.set_quantity(&cart, &startklar(), "5");
        assert_eq!(cart.quantity_of(&startklar()), Some(5));
        assert_eq!(cart.quantity_of(&care_plan), Some(2));
    }

    #[test]
    fn test_set_quantity_coerces_invalid_input_to_one() {
        let store = store();
        let cart = store.upsert(&Cart::empty(), &startklar(), 3);
        let cart = store.set_quantity(&cart, &startklar(), "3abc");
        assert_eq!(cart.quantity_of(&startklar()), Some(1));
    }

    #[test]
    fn test_set_quantity_never_inserts() {
        let store = store();
        // "care-plan" is in the catalog but not in the cart.
        let cart = store.upsert(&Cart::empty(), &startklar(), 1);
        let next = store.set_quantity(&cart, &ProductId::new("care-plan"), "2");
        assert_eq!(next, cart);

        let next = store.set_quantity(&cart, &ProductId::new("unknown-sku"), "2");
        assert_eq!(next, cart);
    }

    #[test]
    fn test_remove_filters_line() {
        let store = store();
        let care_plan = ProductId::new("care-plan");
        let cart = store.upsert(&store.upsert(&Cart::empty(), &startklar(), 1), &care_plan, 1);

        let cart = store.remove(&cart, &startklar());
        assert!(!cart.contains(&startklar()));
        assert!(cart.contains(&care_plan));

        // absent id is a no-op
        let again = store.remove(&cart, &startklar());
        assert_eq!(again, cart);
    }

    #[test]
    fn test_remove_then_upsert_leaves_no_ghost_state() {
        let store = store();
        let cart = store.upsert(&Cart::empty(), &startklar(), 7);
        let cart = store.remove(&cart, &startklar());
        let cart = store.upsert(&cart, &startklar(), 1);
        assert_eq!(cart.quantity_of(&startklar()), Some(1));
        assert_eq!(cart, store.upsert(&Cart::empty(), &startklar(), 1));
    }

    #[test]
    fn test_quantity_at_least_one_after_adversarial_sequence() {
        let store = store();
        let care_plan = ProductId::new("care-plan");
        let mut cart = Cart::empty();
        cart = store.upsert(&cart, &startklar(), -3);
        cart = store.upsert(&cart, &care_plan, 0);
        cart = store.set_quantity(&cart, &startklar(), "-9");
        cart = store.set_quantity(&cart, &care_plan, "abc");
        cart = store.upsert(&cart, &startklar(), -1000);

        for line in cart.lines() {
            assert!(line.qty >= 1);
        }
    }

    #[test]
    fn test_glue_ops_persist_and_return_new_cart() {
        let store = store();
        let cart = store.add_one(&startklar()).unwrap();
        assert_eq!(cart.quantity_of(&startklar()), Some(1));
        assert_eq!(store.load(), cart);

        let cart = store.change_quantity(&startklar(), "4").unwrap();
        assert_eq!(store.load().quantity_of(&startklar()), Some(4));
        assert_eq!(store.load(), cart);

        let cart = store.remove_line(&startklar()).unwrap();
        assert!(cart.is_empty());
        assert!(store.load().is_empty());
    }
}
