//! The single owned state container for the storefront.
//!
//! Both the cart panel and the chat assistant go through [`ShopState`];
//! no component holds an independent copy of the cart or the conversation
//! log. Handlers lock the state for the duration of one event, so one
//! request is one atomic state update.

use rust_decimal::Decimal;
use velvet_lane_core::{CartItem, ChatMessage, ChatRole, Product, ProductId};

/// Transient record of which items are being checked out while the
/// assistant awaits a delivery address.
///
/// An empty `selected` list means "entire cart". The interpreter is in its
/// address-collecting state exactly while a session exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSession {
    selected: Vec<ProductId>,
}

impl CheckoutSession {
    /// Session covering the whole cart.
    #[must_use]
    pub const fn whole_cart() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Session covering specific cart entries.
    #[must_use]
    pub const fn for_items(selected: Vec<ProductId>) -> Self {
        Self { selected }
    }

    /// Whether this session targets the entire cart.
    #[must_use]
    pub fn is_whole_cart(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected product ids (empty for whole-cart sessions).
    #[must_use]
    pub fn selected(&self) -> &[ProductId] {
        &self.selected
    }
}

/// In-memory storefront state: cart, conversation log, delivery address,
/// and the assistant's pending checkout session.
#[derive(Debug, Default)]
pub struct ShopState {
    cart: Vec<CartItem>,
    messages: Vec<ChatMessage>,
    delivery_address: Option<String>,
    checkout: Option<CheckoutSession>,
}

impl ShopState {
    /// The cart, in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// The conversation log, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The last delivery address supplied at checkout, if any.
    #[must_use]
    pub fn delivery_address(&self) -> Option<&str> {
        self.delivery_address.as_deref()
    }

    /// The pending checkout session, if the assistant is awaiting an address.
    #[must_use]
    pub const fn checkout(&self) -> Option<&CheckoutSession> {
        self.checkout.as_ref()
    }

    /// Find a cart entry by product id.
    #[must_use]
    pub fn find_in_cart(&self, id: ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.product.id == id)
    }

    /// Add a product to the cart.
    ///
    /// Increments the quantity if an entry with the same id exists,
    /// otherwise appends a new entry with quantity 1. Existing entries keep
    /// their position; new entries go at the end.
    pub fn add_to_cart(&mut self, product: Product) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.cart.push(CartItem::new(product));
        }
    }

    /// Remove the entry with the given id. No-op if absent.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.retain(|item| item.product.id != id);
    }

    /// Set the quantity for the entry with the given id. No-op if absent.
    ///
    /// Quantity is `u32`, so non-negativity is enforced by the type;
    /// callers decrement with `saturating_sub`.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Zero the quantities of the given entries in place.
    ///
    /// Entries stay in the cart with quantity 0; this is the specific-item
    /// checkout side effect, distinct from removal.
    pub fn zero_quantities(&mut self, ids: &[ProductId]) {
        for item in &mut self.cart {
            if ids.contains(&item.product.id) {
                item.quantity = 0;
            }
        }
    }

    /// Overwrite the stored delivery address.
    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = Some(address.into());
    }

    /// Begin a checkout session (the assistant now awaits an address).
    pub fn begin_checkout(&mut self, session: CheckoutSession) {
        self.checkout = Some(session);
    }

    /// Consume the pending checkout session, returning it.
    pub const fn take_checkout(&mut self) -> Option<CheckoutSession> {
        self.checkout.take()
    }

    /// Append a message to the conversation log.
    pub fn push_message(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    /// Sum of price times quantity over the whole cart.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }
}
