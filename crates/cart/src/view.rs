//! View-model renderers.
//!
//! Pure functions of `(Cart, Catalog)` producing plain display data; a thin
//! adapter in the host UI maps these onto actual widgets and routes edits back
//! through the store's glue operations. Each call rebuilds the whole
//! view-model from scratch - no incremental patching, cart sizes are tiny.

use casekompass_core::{Cart, Catalog, ProductId};

use crate::checkout::{OrderDraft, order_draft};
use crate::config::CartConfig;
use crate::pricing::price;

/// Cart badge display data.
///
/// One badge may appear on every page; all of them show the total unit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Text to show, empty when the cart is empty.
    pub label: String,
    /// When true the badge is cleared and hidden from assistive technology.
    pub hidden: bool,
}

/// Derive the badge from a cart.
///
/// The count is the sum of quantities across all lines, not the line count.
#[must_use]
pub fn badge_view(cart: &Cart) -> BadgeView {
    let count = cart.total_quantity();
    if count == 0 {
        BadgeView {
            label: String::new(),
            hidden: true,
        }
    } else {
        BadgeView {
            label: count.to_string(),
            hidden: false,
        }
    }
}

/// One cart-page line row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    /// SKU the row's quantity input and remove control act on.
    pub id: ProductId,
    /// Linked product name.
    pub name: String,
    /// Detail page URL the name links to.
    pub url: String,
    /// Formatted unit price, shown as "Preis: ... inkl. MwSt.".
    pub unit_price: String,
    /// Current quantity, the value of the numeric input.
    pub qty: u32,
    /// Formatted line total.
    pub line_total: String,
}

/// Cart-page summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryView {
    /// Formatted grand total, rounded once from the exact sum.
    pub total: String,
    /// Continue-shopping link target.
    pub continue_url: String,
    /// Pre-filled order mail for the checkout trigger.
    pub checkout: Option<OrderDraft>,
}

/// Empty-state panel with navigation shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCartView {
    /// Panel headline.
    pub title: String,
    /// Helper text pointing at the shop.
    pub note: String,
    /// Shop link target.
    pub shop_url: String,
    /// Start page link target.
    pub home_url: String,
}

/// Full cart-page panel: line rows plus summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    /// Panel headline.
    pub title: String,
    /// VAT / delivery note under the headline.
    pub note: String,
    /// Line rows, in cart order.
    pub rows: Vec<CartRowView>,
    /// Summary block.
    pub summary: CartSummaryView,
}

/// The cart page, rebuilt wholesale from the current cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartPageView {
    /// Nothing in the cart.
    Empty(EmptyCartView),
    /// At least one priced line.
    Panel(CartPanelView),
}

/// Derive the cart page from a cart.
///
/// An empty cart (including one holding only unknown SKUs) renders the
/// empty-state panel; otherwise the full line-item list and summary.
#[must_use]
pub fn cart_page_view(cart: &Cart, catalog: &Catalog, config: &CartConfig) -> CartPageView {
    let priced = price(cart, catalog);

    if priced.is_empty() {
        return CartPageView::Empty(EmptyCartView {
            title: "Ihr Warenkorb ist leer".to_owned(),
            note: "Wählen Sie ein Download‑Paket im Shop und legen Sie es in den Warenkorb."
                .to_owned(),
            shop_url: config.shop_url.clone(),
            home_url: config.home_url.clone(),
        });
    }

    let rows = priced
        .lines
        .iter()
        .map(|line| CartRowView {
            id: line.id.clone(),
            name: line.name.clone(),
            url: line.url.clone(),
            unit_price: line.unit_price.display(),
            qty: line.qty,
            line_total: line.line_total.display(),
        })
        .collect();

    CartPageView::Panel(CartPanelView {
        title: "Warenkorb".to_owned(),
        note: "Endpreise inkl. MwSt. (wie angegeben). Downloads werden nach Abschluss \
               bereitgestellt."
            .to_owned(),
        rows,
        summary: CartSummaryView {
            total: priced.total.display(),
            continue_url: config.shop_url.clone(),
            checkout: order_draft(&priced, config),
        },
    })
}
