//! Checkout assembler.
//!
//! "Checkout" here is the whole order pipeline: a pre-filled mail draft the
//! customer sends to the operator. No payment, no server order record.

use casekompass_core::Email;

use crate::config::CartConfig;
use crate::pricing::PricedCart;

/// A ready-to-open outbound mail draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Fixed operator address.
    pub to: Email,
    /// Literal subject line.
    pub subject: String,
    /// Plain-text order summary: one line per item plus the grand total.
    pub body: String,
}

impl OrderDraft {
    /// The draft as a `mailto:` URI with subject and body fully URL-escaped.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body),
        )
    }
}

/// Assemble the order draft for a priced cart.
///
/// Returns `None` for an empty cart - there is nothing to order, so the page
/// shows no checkout trigger.
#[must_use]
pub fn order_draft(priced: &PricedCart, config: &CartConfig) -> Option<OrderDraft> {
    if priced.is_empty() {
        return None;
    }

    let items = priced
        .lines
        .iter()
        .map(|line| {
            format!(
                "- {} (Menge: {}) – {}",
                line.name,
                line.qty,
                line.line_total.display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        "Hallo,\n\nich möchte folgende Download-Pakete bestellen:\n\n{items}\n\n\
         Gesamt: {}\n\nBitte senden Sie mir die weiteren Schritte/Download-Infos.\n\n\
         Viele Grüße",
        priced.total.display()
    );

    Some(OrderDraft {
        to: config.order_email.clone(),
        subject: config.order_subject.clone(),
        body,
    })
}
