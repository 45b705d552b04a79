//! Core types for Velvet Lane.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod chat;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartItem;
pub use chat::{ChatMessage, ChatRole};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::Product;
