//! Velvet Lane Core - Shared types library.
//!
//! This crate provides common types used across all Velvet Lane components:
//! - `storefront` - The public-facing demo storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP handlers, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, cart items, and chat messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
