//! Core types for Marketstall.
//!
//! This module provides type-safe wrappers for the cart's domain
//! concepts.

pub mod cart;
pub mod id;
pub mod line_item;

pub use cart::Cart;
pub use id::ProductId;
pub use line_item::{CartLineInput, LineItem};
