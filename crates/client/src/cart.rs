//! Client-side cart.
//!
//! The cart is the customer's full view of the store's listings; an item is
//! "in the cart" when its quantity is non-zero. Quantities are clamped to
//! the per-item maximum by [`Listing::adjust_quantity`].

use rust_decimal::Decimal;

use swapmart_core::{Listing, PriceError};

/// The customer's cart over the loaded listings.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    listings: Vec<Listing>,
}

impl Cart {
    /// Build a cart from freshly loaded listings. Quantities start at
    /// whatever the listings carry (normally zero).
    #[must_use]
    pub const fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// All listings, including those with zero quantity.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Adjust the quantity of the listing with `id` by `delta`, clamped to
    /// the allowed range. Unknown ids are ignored.
    pub fn adjust(&mut self, id: i64, delta: i8) {
        if let Some(listing) = self.listings.iter_mut().find(|l| l.id == id) {
            listing.adjust_quantity(delta);
        }
    }

    /// The listings currently in the cart: quantity greater than zero.
    #[must_use]
    pub fn items(&self) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.quantity > 0)
            .cloned()
            .collect()
    }

    /// Number of distinct listings in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.iter().filter(|l| l.quantity > 0).count()
    }

    /// Whether no listing has a non-zero quantity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Order total: unit price times quantity, summed over cart items.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] when a listing carries an unparseable price
    /// display string.
    pub fn total(&self) -> Result<Decimal, PriceError> {
        let mut sum = Decimal::ZERO;
        for listing in self.listings.iter().filter(|l| l.quantity > 0) {
            sum += listing.unit_price()?.amount() * Decimal::from(listing.quantity);
        }
        Ok(sum)
    }

    /// Reset every quantity to zero, e.g. after a successful order.
    pub fn reset(&mut self) {
        for listing in &mut self.listings {
            listing.quantity = 0;
        }
    }
}
