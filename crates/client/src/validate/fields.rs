//! Per-field validators.
//!
//! Each validator takes raw input and returns a [`FieldResult`]. Rules and
//! messages are a compatibility contract with the deployed storefront;
//! change neither without a migration plan. Free-text values pass through
//! an HTML-sanitizing pass before acceptance.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;
use rust_decimal::Decimal;

use super::FieldResult;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("Invalid regex")
});

// The sign-up password charset: ASCII alphanumerics plus printable
// punctuation, no space, no backslash.
static PASSWORD_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[A-Za-z0-9!"#$%&'()*+,\-./:;<=>?@\[\]^_`{|}~]{6,30}$"##)
        .expect("Invalid regex")
});

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\d[A-Za-z][ -]?\d[A-Za-z]\d$").expect("Invalid regex"));

static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("Invalid regex"));

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("Invalid regex"));

static IMAGE_EXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(avif|apng|bmp|gif|ico|jpeg|jpg|png|svg|tiff?|webp|heic)$")
        .expect("Invalid regex")
});

/// Strip markup from free-text input before it is stored or echoed.
#[must_use]
pub fn sanitize(input: &str) -> String {
    ammonia::clean(input)
}

/// First or last name: 2 to 40 characters.
#[must_use]
pub fn name(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    let len = input.chars().count();
    if (2..=40).contains(&len) {
        FieldResult::Valid(sanitize(input))
    } else {
        FieldResult::Invalid("Name must be 2 to 40 characters long")
    }
}

/// Product name: 2 to 50 characters.
#[must_use]
pub fn product_name(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    let len = input.chars().count();
    if (2..=50).contains(&len) {
        FieldResult::Valid(sanitize(input))
    } else {
        FieldResult::Invalid("Product name must be 2 to 50 characters long")
    }
}

/// Email address: RFC-lite pattern, at most 70 characters.
#[must_use]
pub fn email(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    let within_length = input.chars().count() <= 70;
    if within_length && EMAIL_RE.is_match(input) {
        FieldResult::Valid(sanitize(input))
    } else if !within_length {
        FieldResult::Invalid("Email address cannot be more than 70 characters long")
    } else {
        FieldResult::Invalid("Invalid email address")
    }
}

/// Sign-in password: accepted verbatim when non-empty; the server is the
/// authority on existing passwords.
#[must_use]
pub fn sign_in_password(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        FieldResult::Empty
    } else {
        FieldResult::Valid(sanitize(input))
    }
}

/// Sign-up password: at least one digit, one lowercase and one uppercase
/// letter, 6 to 30 characters from the allowed charset, and not equal to
/// the email field when that field currently holds a valid email
/// (`accepted_email`).
///
/// The first failing rule determines the message.
#[must_use]
pub fn sign_up_password(input: &str, accepted_email: Option<&str>) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }

    let has_digit = input.chars().any(|c| c.is_ascii_digit());
    let has_lowercase = input.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = input.chars().any(|c| c.is_ascii_uppercase());
    let is_6_to_30 = (6..=30).contains(&input.chars().count());
    let same_as_email = accepted_email.is_some_and(|email| email == input);

    if has_digit
        && has_lowercase
        && has_uppercase
        && PASSWORD_CHARSET_RE.is_match(input)
        && !same_as_email
    {
        return FieldResult::Valid(sanitize(input));
    }

    if !has_digit {
        FieldResult::Invalid("Password must contain at least one digit")
    } else if !has_lowercase {
        FieldResult::Invalid("Password must contain at least one lowercase letter")
    } else if !has_uppercase {
        FieldResult::Invalid("Password must contain at least one uppercase letter")
    } else if !is_6_to_30 {
        FieldResult::Invalid("Password must be 6 to 30 characters long")
    } else if same_as_email {
        FieldResult::Invalid("Password cannot be the same as your email address")
    } else {
        FieldResult::Invalid("Invalid password")
    }
}

/// Confirm-password: must equal the sibling password field.
///
/// Comparison is bidirectional: the caller re-runs this whenever either
/// field changes, passing the other field's current raw text.
#[must_use]
pub fn confirm_password(input: &str, password_input: &str) -> FieldResult<()> {
    if input.is_empty() {
        FieldResult::Empty
    } else if input == password_input {
        FieldResult::Valid(())
    } else {
        FieldResult::Invalid("Passwords do not match")
    }
}

/// One-time password: a 4-digit integer, 1000 to 9999.
#[must_use]
pub fn otp(input: &str) -> FieldResult<u16> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    if input.chars().all(|c| c.is_ascii_digit())
        && let Ok(value) = input.parse::<u16>()
        && (1000..=9999).contains(&value)
    {
        FieldResult::Valid(value)
    } else {
        FieldResult::Invalid("Invalid OTP")
    }
}

/// Feedback text: trimmed length at least 5, raw length at most 1000.
#[must_use]
pub fn feedback(input: &str) -> FieldResult<String> {
    if input.chars().count() <= 1000 && input.trim().chars().count() >= 5 {
        FieldResult::Valid(sanitize(input))
    } else if input.is_empty() {
        FieldResult::Empty
    } else if input.trim().chars().count() < 5 {
        FieldResult::Invalid("Feedback must be at least 5 characters long")
    } else {
        FieldResult::Invalid("Feedback cannot be more than 1000 characters long")
    }
}

/// Shipping address: at most 100 characters.
#[must_use]
pub fn address(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    if input.chars().count() <= 100 {
        FieldResult::Valid(sanitize(input))
    } else {
        FieldResult::Invalid("Address must be less than 100 characters")
    }
}

/// Postal code: Canadian pattern `A1A 1A1` (space or dash optional).
#[must_use]
pub fn zip(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    if ZIP_RE.is_match(input) {
        FieldResult::Valid(sanitize(input))
    } else {
        FieldResult::Invalid("Invalid zip code")
    }
}

/// Phone number: exactly 10 digits.
#[must_use]
pub fn phone(input: &str) -> FieldResult<u64> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    let all_digits = input.chars().all(|c| c.is_ascii_digit());
    if all_digits
        && input.len() == 10
        && let Ok(value) = input.parse::<u64>()
    {
        FieldResult::Valid(value)
    } else if input.len() != 10 {
        FieldResult::Invalid("Phone number must be 10 digits long")
    } else {
        FieldResult::Invalid("Invalid phone number")
    }
}

/// Card number: exactly 16 digits. Kept as a string so leading zeros
/// survive.
#[must_use]
pub fn card(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    if input.len() == 16 && input.chars().all(|c| c.is_ascii_digit()) {
        FieldResult::Valid(input.to_owned())
    } else if input.len() != 16 {
        FieldResult::Invalid("Card number must be 16 digits long")
    } else {
        FieldResult::Invalid("Invalid card number")
    }
}

/// Card security code: exactly 3 digits.
#[must_use]
pub fn csc(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    if input.len() == 3 && input.chars().all(|c| c.is_ascii_digit()) {
        FieldResult::Valid(input.to_owned())
    } else if input.len() != 3 {
        FieldResult::Invalid("CSC must be 3 digits long")
    } else {
        FieldResult::Invalid("Invalid CSC")
    }
}

/// A month/year reference point for card-expiry checks.
///
/// Injected rather than read from the clock inside the validator so tests
/// are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDate {
    /// Month, 1 to 12.
    pub month: u32,
    /// Two-digit year (e.g. 25 for 2025).
    pub year: u32,
}

impl CardDate {
    /// The current local month and two-digit year.
    #[must_use]
    pub fn current() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year().unsigned_abs() % 100,
        }
    }
}

/// Card expiry: `MM/YY`, not in the past relative to `now`.
#[must_use]
pub fn expiry(input: &str, now: CardDate) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }
    let Some(captures) = EXPIRY_RE.captures(input) else {
        return FieldResult::Invalid("Invalid expiration date");
    };

    // The regex guarantees two numeric groups.
    let month: u32 = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default();
    let year: u32 = captures
        .get(2)
        .and_then(|y| y.as_str().parse().ok())
        .unwrap_or_default();

    if year > now.year || (year == now.year && month >= now.month) {
        FieldResult::Valid(sanitize(input))
    } else {
        FieldResult::Invalid("Card has expired")
    }
}

/// Listing price: a positive number with at most two decimal places, no
/// more than $1,000,000.
#[must_use]
pub fn price(input: &str) -> FieldResult<Decimal> {
    const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

    if input.is_empty() {
        return FieldResult::Empty;
    }

    let parsed = input.parse::<Decimal>().ok();
    if PRICE_RE.is_match(input)
        && let Some(value) = parsed
        && value > Decimal::ZERO
        && value <= MAX_PRICE
    {
        return FieldResult::Valid(value);
    }

    match parsed {
        Some(value) if value > MAX_PRICE => FieldResult::Invalid("Price cannot exceed $1,000,000"),
        Some(value) if value <= Decimal::ZERO => {
            FieldResult::Invalid("Price must be greater than $0")
        }
        _ => FieldResult::Invalid("Invalid price"),
    }
}

/// Image URL: absolute http(s) URL whose path ends in a recognized image
/// extension, at most 2000 characters. The input is sanitized before
/// checking, so markup smuggled into the URL fails validation.
#[must_use]
pub fn image_url(input: &str) -> FieldResult<String> {
    if input.is_empty() {
        return FieldResult::Empty;
    }

    let sanitized = sanitize(input);
    let valid = sanitized.chars().count() <= 2000
        && url::Url::parse(&sanitized).is_ok_and(|parsed| {
            matches!(parsed.scheme(), "http" | "https") && IMAGE_EXT_RE.is_match(parsed.path())
        });

    if valid {
        FieldResult::Valid(sanitized)
    } else {
        FieldResult::Invalid("Invalid image URL")
    }
}
