//! Listing commands: browse, create, and delete.

#![allow(clippy::print_stdout)]

use swapmart_client::validate::fields;
use swapmart_core::Listing;

use super::{CliError, client, require};

/// List every listing in the store.
pub async fn all() -> Result<(), CliError> {
    let listings = client()?.all_listings().await?;
    print_table(&listings);
    Ok(())
}

/// List the signed-in seller's own listings.
pub async fn mine() -> Result<(), CliError> {
    let listings = client()?.my_listings().await?;
    print_table(&listings);
    Ok(())
}

/// Create a listing after validating every field.
pub async fn create(name: &str, price: &str, image_url: &str) -> Result<(), CliError> {
    let name = require(fields::product_name(name), "Product name cannot be empty")?;
    let price = require(fields::price(price), "Price cannot be empty")?;
    let image_url = require(fields::image_url(image_url), "Image URL cannot be empty")?;

    let listing = client()?.create_listing(&name, price, &image_url).await?;
    println!("Created listing #{}: {} at {}", listing.id, listing.name, listing.price);
    Ok(())
}

/// Delete one of the seller's listings.
pub async fn delete(id: i64) -> Result<(), CliError> {
    client()?.delete_listing(id).await?;
    println!("Deleted listing #{id}.");
    Ok(())
}

fn print_table(listings: &[Listing]) {
    if listings.is_empty() {
        println!("No listings.");
        return;
    }
    for listing in listings {
        println!(
            "#{:<6} {:<30} {:>10}  {}",
            listing.id, listing.name, listing.price, listing.seller
        );
    }
}
