//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use velvet_lane_core::Product;

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

/// Home page template: product grid, cart panel, chat panel.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .products()
        .iter()
        .map(ProductView::from)
        .collect();

    HomeTemplate { products }
}
