//! Listing operations and checkout.

use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;

use swapmart_core::Listing;

use crate::error::{ApiError, AuthCallError};

use super::ApiClient;
use super::auth::expect_success;

/// Creation payload for `POST /core/create_listing/`.
///
/// The backend expects `price` as a JSON number, not the display string it
/// ships back in [`Listing`].
#[derive(Debug, Serialize)]
struct CreateListingRequest<'a> {
    name: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(rename = "imageUrl")]
    image_url: &'a str,
}

/// Checkout payload for `POST /core/place_order/`.
///
/// `items` carries the cart listings with their quantities; the remaining
/// fields are the validated checkout form values.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Cart items with non-zero quantities.
    pub items: Vec<Listing>,
    /// Shipping address.
    pub address: String,
    /// Postal code.
    pub zip: String,
    /// 10-digit phone number.
    pub phone: u64,
    /// 16-digit card number.
    pub card: String,
    /// Card expiry, `MM/YY`.
    pub exp: String,
    /// 3-digit card security code.
    pub csc: String,
}

impl ApiClient {
    /// Fetch every listing in the store (customer view).
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not
    /// be refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn all_listings(&self) -> Result<Vec<Listing>, AuthCallError> {
        self.fetch_listings("/core/get_all_listings/").await
    }

    /// Fetch the signed-in seller's own listings.
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not
    /// be refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn my_listings(&self) -> Result<Vec<Listing>, AuthCallError> {
        self.fetch_listings("/core/get_my_listings/").await
    }

    /// Create a listing; returns the created record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not
    /// be refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn create_listing(
        &self,
        name: &str,
        price: Decimal,
        image_url: &str,
    ) -> Result<Listing, AuthCallError> {
        let body = serde_json::to_value(CreateListingRequest {
            name,
            price,
            image_url,
        })
        .map_err(ApiError::Json)?;
        let response = self
            .auth_fetch(Method::POST, "/core/create_listing/", Some(&body))
            .await?
            .ok_or(AuthCallError::SessionExpired)?;

        expect_success(&response)?;
        Ok(response.json().await.map_err(ApiError::Http)?)
    }

    /// Delete one of the seller's listings.
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not
    /// be refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn delete_listing(&self, id: i64) -> Result<(), AuthCallError> {
        let response = self
            .auth_fetch(
                Method::DELETE,
                "/core/delete_listing/",
                Some(&serde_json::json!({ "id": id })),
            )
            .await?
            .ok_or(AuthCallError::SessionExpired)?;

        expect_success(&response).map_err(AuthCallError::Api)
    }

    /// Place an order for the cart.
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not
    /// be refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<(), AuthCallError> {
        let body = serde_json::to_value(order).map_err(ApiError::Json)?;
        let response = self
            .auth_fetch(Method::POST, "/core/place_order/", Some(&body))
            .await?
            .ok_or(AuthCallError::SessionExpired)?;

        expect_success(&response).map_err(AuthCallError::Api)
    }

    async fn fetch_listings(&self, path: &str) -> Result<Vec<Listing>, AuthCallError> {
        let response = self
            .auth_fetch(Method::GET, path, None)
            .await?
            .ok_or(AuthCallError::SessionExpired)?;

        if !response.status().is_success() {
            return Err(AuthCallError::Api(ApiError::Status(response.status())));
        }

        Ok(response.json().await.map_err(ApiError::Http)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_listing_body_sends_price_as_number() {
        let body = serde_json::to_value(CreateListingRequest {
            name: "Desk Lamp",
            price: Decimal::new(2499, 2),
            image_url: "https://img.example.com/lamp.png",
        })
        .unwrap();

        assert!(body["price"].is_number());
        assert_eq!(body["price"], serde_json::json!(24.99));
        assert_eq!(body["name"], "Desk Lamp");
        assert_eq!(body["imageUrl"], "https://img.example.com/lamp.png");
    }
}
