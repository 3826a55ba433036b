//! Marketstall Core - Shared types library.
//!
//! This crate provides the domain types shared by every Marketstall
//! component:
//!
//! - `cart` - The cart store that keeps line items synchronized with
//!   durable storage
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! async code. All cart state transitions are pure functions on these
//! types, which keeps them trivially testable and allows the crate to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `LineItem`, `CartLineInput`, and the
//!   [`types::Cart`] value with its state-transition methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
