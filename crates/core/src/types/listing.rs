//! Marketplace listing type.

use serde::{Deserialize, Serialize};

use crate::types::{Price, PriceError};

/// Maximum number of units of one listing a cart may hold.
pub const MAX_CART_QUANTITY: u8 = 5;

/// A marketplace listing.
///
/// Returned by the listings endpoints and posted back on checkout. The
/// `price` field is the backend's currency-formatted display string;
/// `quantity` is local cart state (0 outside a cart), clamped to
/// [`MAX_CART_QUANTITY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing database ID.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Currency-formatted display price (e.g. `"$10.00"`).
    pub price: String,
    /// Absolute URL of the product image.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Units of this listing in the local cart.
    #[serde(default)]
    pub quantity: u8,
    /// Display name of the seller.
    #[serde(default)]
    pub seller: String,
}

impl Listing {
    /// Parse the display price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the price string is empty or malformed.
    pub fn unit_price(&self) -> Result<Price, PriceError> {
        Price::parse_display(&self.price)
    }

    /// Adjust the cart quantity by `delta`, clamping to
    /// `0..=MAX_CART_QUANTITY`.
    pub fn adjust_quantity(&mut self, delta: i8) {
        let adjusted = i16::from(self.quantity) + i16::from(delta);
        let clamped = adjusted.clamp(0, i16::from(MAX_CART_QUANTITY));
        // Lossless: the clamp bounds fit in u8.
        self.quantity = u8::try_from(clamped).unwrap_or(0);
    }
}
