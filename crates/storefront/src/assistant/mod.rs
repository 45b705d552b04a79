//! The scripted shopping assistant.
//!
//! This module is the command interpreter: given a free-text user message
//! it classifies the intent, mutates the cart through [`ShopState`], and
//! appends the assistant's reply to the conversation log.
//!
//! The interpreter has two states, made explicit by the presence of a
//! [`CheckoutSession`] on the state container:
//!
//! - `Idle` - no session; messages are classified as commands.
//! - `AwaitingAddress` - a session exists; the next message, whatever it
//!   says, is consumed as the delivery address. There is no cancel command.

pub mod intent;

use rand::Rng;
use rust_decimal::Decimal;
use tracing::instrument;
use velvet_lane_core::{CartItem, ChatRole};

use crate::catalog::Catalog;
use crate::store::{CheckoutSession, ShopState};

use self::intent::{Intent, classify};

/// Reply when the voice adapter starts listening.
pub const VOICE_LISTENING_REPLY: &str = "Listening... Speak your command.";

/// Reply when the voice adapter reports a recognition error.
pub const VOICE_ERROR_REPLY: &str = "Sorry, I couldn't hear that. Please try again.";

/// Reply when the host provides no speech-recognition capability.
pub const VOICE_UNSUPPORTED_REPLY: &str =
    "Sorry, voice recognition is not supported in your browser.";

const EMPTY_CART_REPLY: &str =
    "Your cart is empty. Would you like to shop for something specific?";

const ADDRESS_PROMPT: &str =
    "Please provide your delivery address to complete the checkout.";

const NO_MATCHING_ITEMS_REPLY: &str =
    "I couldn't find those specific items in your cart. Please check your cart and try again.";

const HELP_REPLY: &str = "How can I help you with your shopping today? \
You can ask me to buy products or checkout your cart. For example:\n\
- \"Buy Premium Watch\"\n\
- \"Checkout Premium Watch\"\n\
- \"Checkout all\"";

/// The command interpreter.
///
/// Holds a reference to the catalog for name lookups; all mutable state
/// lives on the [`ShopState`] passed into [`Self::handle_message`].
pub struct Assistant<'a> {
    catalog: &'a Catalog,
}

impl<'a> Assistant<'a> {
    /// Create an assistant over the given catalog.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Process one user message.
    ///
    /// The message is appended to the conversation log verbatim before
    /// interpretation; the assistant's reply is appended after. Voice
    /// transcripts go through this exact path.
    #[instrument(skip(self, state, message))]
    pub fn handle_message(&self, state: &mut ShopState, message: &str) {
        state.push_message(ChatRole::User, message);

        // AwaitingAddress: the whole message is the delivery address.
        if let Some(session) = state.take_checkout() {
            let reply = complete_checkout(state, &session, message);
            state.push_message(ChatRole::Assistant, reply);
            return;
        }

        let reply = match classify(message) {
            Intent::Buy(query) => self.buy(state, &query),
            Intent::CheckoutAll | Intent::CheckoutItems(_) if state.cart().is_empty() => {
                EMPTY_CART_REPLY.to_string()
            }
            Intent::CheckoutAll => {
                state.begin_checkout(CheckoutSession::whole_cart());
                ADDRESS_PROMPT.to_string()
            }
            Intent::CheckoutItems(tokens) => checkout_items(state, &tokens),
            Intent::Unknown => HELP_REPLY.to_string(),
        };
        state.push_message(ChatRole::Assistant, reply);
    }

    /// Resolve a product name query and add the result to the cart.
    fn buy(&self, state: &mut ShopState, query: &str) -> String {
        self.catalog.find_by_name(query).map_or_else(
            || {
                format!(
                    "I'm sorry, I couldn't find a product matching \"{query}\". \
                     Could you please try again with a different product name?"
                )
            },
            |product| {
                let name = product.name.clone();
                state.add_to_cart(product.clone());
                format!(
                    "I've added {name} to your cart. \
                     Would you like to continue shopping or checkout?"
                )
            },
        )
    }
}

/// Match checkout tokens against cart item names and open a session.
///
/// Tokens match by case-insensitive substring; matches are unioned in cart
/// order (one entry per item, however many tokens hit it).
fn checkout_items(state: &mut ShopState, tokens: &[String]) -> String {
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let matched: Vec<(velvet_lane_core::ProductId, String)> = state
        .cart()
        .iter()
        .filter(|item| {
            let name = item.product.name.to_lowercase();
            lowered.iter().any(|token| name.contains(token))
        })
        .map(|item| (item.product.id, item.product.name.clone()))
        .collect();

    if matched.is_empty() {
        return NO_MATCHING_ITEMS_REPLY.to_string();
    }

    let names = matched
        .iter()
        .map(|(_, name)| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");
    let ids = matched.into_iter().map(|(id, _)| id).collect();
    state.begin_checkout(CheckoutSession::for_items(ids));

    format!("I'll help you checkout these items:\n{names}\n\nPlease provide your delivery address.")
}

/// Complete a pending checkout with the supplied address.
///
/// The total is computed over the exact target set before any side effect.
/// Whole-cart sessions clear the cart; specific sessions zero the selected
/// quantities in place.
fn complete_checkout(state: &mut ShopState, session: &CheckoutSession, address: &str) -> String {
    let targets: Vec<CartItem> = if session.is_whole_cart() {
        state.cart().to_vec()
    } else {
        state
            .cart()
            .iter()
            .filter(|item| session.selected().contains(&item.product.id))
            .cloned()
            .collect()
    };

    let total: Decimal = targets.iter().map(CartItem::line_total).sum();
    let estimated_days = rand::rng().random_range(3..=5);
    let summary = order_summary(&targets, total, address, estimated_days);

    state.set_delivery_address(address);
    if session.is_whole_cart() {
        state.clear_cart();
    } else {
        state.zero_quantities(session.selected());
    }

    summary
}

/// Render the order confirmation message.
fn order_summary(items: &[CartItem], total: Decimal, address: &str, estimated_days: u32) -> String {
    let lines = items
        .iter()
        .map(|item| {
            format!(
                "- {} ({}x) - {}",
                item.product.name,
                item.quantity,
                money(item.line_total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Thank you! Your order has been successfully placed!\n\n\
         Order Summary:\n{lines}\n\n\
         Total: {}\n\
         Delivery Address: {address}\n\
         Estimated Delivery: {estimated_days} days",
        money(total)
    )
}

/// Format a decimal amount as a dollar price string.
fn money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use velvet_lane_core::{ChatMessage, ProductId};

    fn catalog() -> Catalog {
        Catalog::default()
    }

    fn last_reply(state: &ShopState) -> &ChatMessage {
        state.messages().last().expect("at least one message")
    }

    #[test]
    fn test_buy_adds_to_cart_and_confirms() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Running Shoes");

        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.cart()[0].product.name, "Running Shoes");
        assert_eq!(state.cart()[0].quantity, 1);
        assert!(last_reply(&state).content.contains("I've added Running Shoes"));
    }

    #[test]
    fn test_buy_unknown_product_leaves_cart_unchanged() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Unicorn Saddle");

        assert!(state.cart().is_empty());
        assert!(
            last_reply(&state)
                .content
                .contains("couldn't find a product matching \"Unicorn Saddle\"")
        );
    }

    #[test]
    fn test_checkout_with_empty_cart() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "checkout");

        assert_eq!(last_reply(&state).content, EMPTY_CART_REPLY);
        assert!(state.checkout().is_none());
    }

    #[test]
    fn test_unknown_message_gets_help_reply() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "hello");

        assert_eq!(last_reply(&state).content, HELP_REPLY);
        assert!(state.checkout().is_none());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_specific_checkout_full_flow() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Premium Watch");
        assistant.handle_message(&mut state, "checkout Premium Watch");

        // One match, now awaiting the address.
        assert!(state.checkout().is_some());
        assert!(
            last_reply(&state)
                .content
                .contains("I'll help you checkout these items:\n- Premium Watch")
        );

        assistant.handle_message(&mut state, "221B Baker Street");

        let summary = &last_reply(&state).content;
        assert!(summary.contains("Total: $299.99"));
        assert!(summary.contains("Delivery Address: 221B Baker Street"));
        assert!(summary.contains("Estimated Delivery:"));

        // Selected item zeroed in place, not removed; back to idle.
        let item = state.find_in_cart(ProductId::new(1)).expect("still present");
        assert_eq!(item.quantity, 0);
        assert!(state.checkout().is_none());
        assert_eq!(state.delivery_address(), Some("221B Baker Street"));
    }

    #[test]
    fn test_specific_checkout_leaves_other_items_untouched() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Premium Watch");
        assistant.handle_message(&mut state, "buy Leather Wallet");
        assistant.handle_message(&mut state, "checkout wallet");
        assistant.handle_message(&mut state, "10 Downing Street");

        let watch = state.find_in_cart(ProductId::new(1)).expect("watch");
        let wallet = state.find_in_cart(ProductId::new(3)).expect("wallet");
        assert_eq!(watch.quantity, 1);
        assert_eq!(wallet.quantity, 0);
    }

    #[test]
    fn test_whole_cart_checkout_clears_cart() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Premium Watch");
        assistant.handle_message(&mut state, "buy Running Shoes");
        assistant.handle_message(&mut state, "checkout all");

        assert_eq!(last_reply(&state).content, ADDRESS_PROMPT);
        assert!(state.checkout().expect("session").is_whole_cart());

        assistant.handle_message(&mut state, "742 Evergreen Terrace");

        let summary = &last_reply(&state).content;
        assert!(summary.contains("- Premium Watch (1x) - $299.99"));
        assert!(summary.contains("- Running Shoes (1x) - $129.99"));
        assert!(summary.contains("Total: $429.98"));
        assert!(state.cart().is_empty());
        assert!(state.checkout().is_none());
    }

    #[test]
    fn test_checkout_total_reflects_quantities() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Sunglasses");
        assistant.handle_message(&mut state, "buy Sunglasses");
        assistant.handle_message(&mut state, "checkout");
        assistant.handle_message(&mut state, "Somewhere");

        let summary = &last_reply(&state).content;
        assert!(summary.contains("- Sunglasses (2x) - $299.98"));
        assert!(summary.contains("Total: $299.98"));
    }

    #[test]
    fn test_checkout_with_unmatched_tokens_stays_idle() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Premium Watch");
        assistant.handle_message(&mut state, "checkout unicorn saddle");

        assert_eq!(last_reply(&state).content, NO_MATCHING_ITEMS_REPLY);
        assert!(state.checkout().is_none());

        // Next message is interpreted as a command, not an address.
        assistant.handle_message(&mut state, "hello");
        assert_eq!(last_reply(&state).content, HELP_REPLY);
    }

    #[test]
    fn test_checkout_list_matches_multiple_items() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Premium Watch");
        assistant.handle_message(&mut state, "buy Leather Wallet");
        assistant.handle_message(&mut state, "buy Running Shoes");
        assistant.handle_message(&mut state, "checkout wallet and shoes");

        let session = state.checkout().expect("session");
        assert_eq!(
            session.selected(),
            [ProductId::new(3), ProductId::new(2)],
        );
    }

    #[test]
    fn test_user_message_logged_before_reply() {
        let catalog = catalog();
        let assistant = Assistant::new(&catalog);
        let mut state = ShopState::default();

        assistant.handle_message(&mut state, "buy Premium Watch");

        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[0].content, "buy Premium Watch");
        assert_eq!(state.messages()[0].role, ChatRole::User);
        assert_eq!(state.messages()[1].role, ChatRole::Assistant);
    }
}
