//! Core types for SwapMart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod account;
pub mod listing;
pub mod price;
pub mod tokens;
pub mod user;

pub use account::{AccountType, AccountTypeError};
pub use listing::{Listing, MAX_CART_QUANTITY};
pub use price::{Price, PriceError};
pub use tokens::TokenPair;
pub use user::UserDetails;
