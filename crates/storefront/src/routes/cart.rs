//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Mutations return the cart-items fragment and fire an `HX-Trigger:
//! cart-updated` event so the count badge refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use velvet_lane_core::{CartItem, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::ShopState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    /// Quantity minus one, clamped at zero, for the decrement button.
    pub dec_quantity: u32,
    pub inc_quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.as_i32(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            dec_quantity: item.quantity.saturating_sub(1),
            inc_quantity: item.quantity + 1,
            price: item.product.price.to_string(),
            line_total: format!("${:.2}", item.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl From<&ShopState> for CartView {
    fn from(shop: &ShopState) -> Self {
        Self {
            items: shop.cart().iter().map(CartItemView::from).collect(),
            total: format!("${:.2}", shop.cart_total()),
            item_count: shop.item_count(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Render the cart-items fragment with the update trigger attached.
fn cart_updated(cart: CartView) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response()
}

/// Get the cart items fragment (HTMX).
#[instrument(skip(state))]
pub async fn items(State(state): State<AppState>) -> impl IntoResponse {
    let cart = CartView::from(&*state.shop());
    CartItemsTemplate { cart }
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.shop().item_count();
    CartCountTemplate { count }
}

/// Add a product to the cart (HTMX).
///
/// The grid's add buttons post known catalog ids, so a missing id is a
/// genuine client error, not a conversational miss.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let mut shop = state.shop();
    shop.add_to_cart(product);
    Ok(cart_updated(CartView::from(&*shop)))
}

/// Set a cart line's quantity (HTMX).
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    let mut shop = state.shop();
    shop.update_quantity(ProductId::new(form.product_id), form.quantity);
    cart_updated(CartView::from(&*shop))
}

/// Remove a cart line (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let mut shop = state.shop();
    shop.remove_from_cart(ProductId::new(form.product_id));
    cart_updated(CartView::from(&*shop))
}
