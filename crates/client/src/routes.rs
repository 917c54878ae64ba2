//! Route resolution.
//!
//! Maps a requested path plus the current session state to the path that
//! should actually render. Unknown paths go to `/404`; known paths are then
//! restricted by sign-in state and account type.

use swapmart_core::AccountType;

/// Paths the app serves. A request matches with or without one trailing
/// slash.
const KNOWN_ROUTES: &[&str] = &[
    "/",
    "/login",
    "/store",
    "/listings",
    "/checkout",
    "/create-listing",
];

/// Routes a signed-in customer may stay on; anything else redirects to the
/// store.
const CUSTOMER_ROUTES: &[&str] = &["/store", "/checkout"];

/// Routes a signed-in seller may stay on; anything else redirects to their
/// listings.
const SELLER_ROUTES: &[&str] = &["/listings", "/create-listing"];

fn matches_route(path: &str, route: &str) -> bool {
    path == route || (path.len() == route.len() + 1 && path.starts_with(route) && path.ends_with('/'))
}

fn is_known(path: &str) -> bool {
    KNOWN_ROUTES.iter().any(|route| matches_route(path, route))
}

/// Resolve `path` to the path that should render.
///
/// - Unknown path: `/404`.
/// - Not signed in: `/login`.
/// - Signed-in customer: the path itself when it is a customer route,
///   otherwise `/store`.
/// - Signed-in seller: the path itself when it is a seller route, otherwise
///   `/listings`.
#[must_use]
pub fn resolve(path: &str, signed_in: bool, account_type: AccountType) -> &'static str {
    if !is_known(path) {
        return "/404";
    }

    if !signed_in {
        return "/login";
    }

    let allowed = match account_type {
        AccountType::Customer => CUSTOMER_ROUTES,
        AccountType::Seller => SELLER_ROUTES,
    };

    allowed
        .iter()
        .find(|route| matches_route(path, route))
        .copied()
        .unwrap_or(match account_type {
            AccountType::Customer => "/store",
            AccountType::Seller => "/listings",
        })
}
