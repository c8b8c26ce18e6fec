//! Cart configuration.
//!
//! The storage key, operator address, and navigation URLs are explicit
//! construction parameters rather than module-level constants, so tests can
//! run isolated store instances without touching any shared storage. No
//! environment variables or flags belong to this subsystem.

use casekompass_core::Email;

/// Construction parameters for a [`crate::store::CartStore`].
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Namespace key of the durable storage entry.
    pub storage_key: String,
    /// Operator address the order draft is sent to.
    pub order_email: Email,
    /// Literal subject line of the order draft.
    pub order_subject: String,
    /// Relative URL of the shop page (empty state and continue-shopping link).
    pub shop_url: String,
    /// Relative URL of the start page (empty state link).
    pub home_url: String,
}

impl Default for CartConfig {
    /// The production casekompass deployment values.
    fn default() -> Self {
        Self {
            storage_key: "casekompass_cart_v1".to_owned(),
            order_email: Email::parse("casekompass@gmx.de")
                .unwrap_or_else(|_| unreachable!("literal address is well-formed")),
            order_subject: "Bestellung – casekompass.de".to_owned(),
            shop_url: "/shop.html".to_owned(),
            home_url: "/".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_deployment() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "casekompass_cart_v1");
        assert_eq!(config.order_email.as_str(), "casekompass@gmx.de");
        assert_eq!(config.order_subject, "Bestellung – casekompass.de");
        assert_eq!(config.shop_url, "/shop.html");
    }
}
