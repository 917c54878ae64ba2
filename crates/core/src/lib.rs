//! SwapMart Core - Shared types library.
//!
//! This crate provides common types used across all SwapMart components:
//! - `client` - Headless storefront client library
//! - `cli` - Command-line tools built on the client
//!
//! # Architecture
//!
//! The core crate contains only types and pure data logic - no I/O, no HTTP
//! clients, no persisted state. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Account types, user details, listings, prices, and token pairs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
