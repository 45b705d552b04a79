//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (grid, cart panel, chat panel)
//! GET  /health                 - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart/items             - Cart items fragment
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add product (returns cart_items, triggers cart-updated)
//! POST /cart/update            - Set quantity (returns cart_items, triggers cart-updated)
//! POST /cart/remove            - Remove item (returns cart_items, triggers cart-updated)
//!
//! # Chat (HTMX fragments)
//! GET  /chat/messages          - Conversation log fragment
//! POST /chat/send              - Run the assistant (returns chat_messages, triggers cart-updated)
//! POST /chat/voice             - Report a voice adapter outcome (returns chat_messages)
//! ```

pub mod cart;
pub mod chat;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(chat::messages))
        .route("/send", post(chat::send))
        .route("/voice", post(chat::voice))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart fragments
        .nest("/cart", cart_routes())
        // Chat fragments
        .nest("/chat", chat_routes())
}
