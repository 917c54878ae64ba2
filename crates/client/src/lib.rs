//! SwapMart headless storefront client.
//!
//! This crate is the logic layer a UI shell consumes: it owns field and form
//! validation, session persistence, the bearer-token refresh protocol, the
//! typed REST operations, the local cart, and route resolution. It renders
//! nothing and holds no UI state.
//!
//! # Architecture
//!
//! - [`validate`] - Pure field validators and pre-submit form gates
//! - [`storage`] / [`session`] - Injected key-value storage and the session
//!   store layered on it
//! - [`api`] - [`api::ApiClient`] with the authenticated-fetch retry-once
//!   protocol and all REST operations
//! - [`cart`] - Local cart over listings
//! - [`routes`] - Pure route resolver
//!
//! # Example
//!
//! ```rust,ignore
//! use swapmart_client::api::ApiClient;
//! use swapmart_client::config::ClientConfig;
//! use swapmart_client::session::SessionStore;
//! use swapmart_client::storage::MemoryStorage;
//! use swapmart_core::AccountType;
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::new(MemoryStorage::new());
//! let client = ApiClient::new(&config, session);
//!
//! let user = client
//!     .sign_in("ada@example.com", "Hunter2x", AccountType::Customer, true)
//!     .await?;
//! let listings = client.all_listings().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod storage;
pub mod validate;
