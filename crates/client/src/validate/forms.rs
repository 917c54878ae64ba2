//! Pre-submit form gates.
//!
//! Each gate evaluates a whole form against the current per-field state and
//! returns a [`FormCheck`]. Fields are checked in the form's declared order,
//! so [`FormCheck::focus_target`] is always the first offending field. The
//! gates never re-run field validation; they only look at whether each
//! field currently holds an accepted value, and supply the
//! "cannot be empty" message when the field was never filled in at all.

/// A field the UI can move focus to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    AccountType,
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Otp,
    Address,
    Zip,
    Phone,
    Card,
    Csc,
    Expiry,
    ProductName,
    Price,
    ImageUrl,
}

/// One offending field.
///
/// `message` is `Some` only when the gate itself supplies the text (empty
/// fields, unselected account type, OTP). `None` means the field already
/// shows a validator message that the gate must not overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: Option<&'static str>,
}

/// Result of gating a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCheck {
    errors: Vec<FieldError>,
}

impl FormCheck {
    /// Whether the form may be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The field that should receive focus: the first offender in the
    /// form's declared order.
    #[must_use]
    pub fn focus_target(&self) -> Option<FormField> {
        self.errors.first().map(|err| err.field)
    }

    /// All offending fields, in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The gate-supplied message for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .and_then(|err| err.message)
    }
}

/// Current state of one submitted field, as tracked by the UI.
#[derive(Debug, Clone, Copy)]
pub struct SubmittedField<'a> {
    /// Whether the field currently holds a value accepted by its validator.
    pub accepted: bool,
    /// The raw text currently in the input.
    pub raw: &'a str,
}

impl<'a> SubmittedField<'a> {
    #[must_use]
    pub const fn new(accepted: bool, raw: &'a str) -> Self {
        Self { accepted, raw }
    }

    /// `Some(error)` when the field blocks submission. An empty field gets
    /// the supplied message; a non-empty rejected field keeps the message
    /// its validator already set.
    fn check(self, field: FormField, empty_message: &'static str) -> Option<FieldError> {
        if self.accepted {
            None
        } else if self.raw.is_empty() {
            Some(FieldError {
                field,
                message: Some(empty_message),
            })
        } else {
            Some(FieldError {
                field,
                message: None,
            })
        }
    }
}

/// Gate the sign-in form. Order: email, password.
#[must_use]
pub fn sign_in(email: SubmittedField<'_>, password: SubmittedField<'_>) -> FormCheck {
    let errors = [
        email.check(FormField::Email, "Email address cannot be empty"),
        password.check(FormField::Password, "Password cannot be empty"),
    ]
    .into_iter()
    .flatten()
    .collect();

    FormCheck { errors }
}

/// Gate the sign-up form. Order: account type, first name, last name,
/// email, password, confirm password.
///
/// The confirm field additionally re-checks equality against the password
/// field's current raw text, so an edit to the password after the confirm
/// field was accepted still blocks submission.
#[must_use]
pub fn sign_up(
    account_type_selected: bool,
    first_name: SubmittedField<'_>,
    last_name: SubmittedField<'_>,
    email: SubmittedField<'_>,
    password: SubmittedField<'_>,
    confirm: SubmittedField<'_>,
) -> FormCheck {
    let account_type_error = if account_type_selected {
        None
    } else {
        Some(FieldError {
            field: FormField::AccountType,
            message: Some("Please select an account type"),
        })
    };

    let confirm_error = confirm
        .check(FormField::ConfirmPassword, "Confirm password cannot be empty")
        .or_else(|| {
            if confirm.raw == password.raw {
                None
            } else {
                Some(FieldError {
                    field: FormField::ConfirmPassword,
                    message: Some("Passwords do not match"),
                })
            }
        });

    let errors = [
        account_type_error,
        first_name.check(FormField::FirstName, "First name cannot be empty"),
        last_name.check(FormField::LastName, "Last name cannot be empty"),
        email.check(FormField::Email, "Email address cannot be empty"),
        password.check(FormField::Password, "Password cannot be empty"),
        confirm_error,
    ]
    .into_iter()
    .flatten()
    .collect();

    FormCheck { errors }
}

/// Gate the password-reset form. Order: OTP, password, confirm password.
///
/// The OTP field always reports "Invalid OTP" when it blocks submission,
/// whether empty or malformed.
#[must_use]
pub fn reset_password(
    otp: SubmittedField<'_>,
    password: SubmittedField<'_>,
    confirm: SubmittedField<'_>,
) -> FormCheck {
    let otp_error = if otp.accepted {
        None
    } else {
        Some(FieldError {
            field: FormField::Otp,
            message: Some("Invalid OTP"),
        })
    };

    let confirm_error = confirm
        .check(FormField::ConfirmPassword, "Confirm password cannot be empty")
        .or_else(|| {
            if confirm.raw == password.raw {
                None
            } else {
                Some(FieldError {
                    field: FormField::ConfirmPassword,
                    message: Some("Passwords do not match"),
                })
            }
        });

    let errors = [
        otp_error,
        password.check(FormField::Password, "Password cannot be empty"),
        confirm_error,
    ]
    .into_iter()
    .flatten()
    .collect();

    FormCheck { errors }
}

/// Gate the checkout form. Order: address, zip, phone, card, CSC, expiry.
#[must_use]
pub fn checkout(
    address: SubmittedField<'_>,
    zip: SubmittedField<'_>,
    phone: SubmittedField<'_>,
    card: SubmittedField<'_>,
    csc: SubmittedField<'_>,
    expiry: SubmittedField<'_>,
) -> FormCheck {
    let errors = [
        address.check(FormField::Address, "Address cannot be empty"),
        zip.check(FormField::Zip, "Zip code cannot be empty"),
        phone.check(FormField::Phone, "Phone number cannot be empty"),
        card.check(FormField::Card, "Card number cannot be empty"),
        csc.check(FormField::Csc, "CSC cannot be empty"),
        expiry.check(FormField::Expiry, "Expiry date cannot be empty"),
    ]
    .into_iter()
    .flatten()
    .collect();

    FormCheck { errors }
}

/// Gate the create-listing form. Order: product name, price, image URL.
#[must_use]
pub fn listing(
    product_name: SubmittedField<'_>,
    price: SubmittedField<'_>,
    image_url: SubmittedField<'_>,
) -> FormCheck {
    let errors = [
        product_name.check(FormField::ProductName, "Product name cannot be empty"),
        price.check(FormField::Price, "Price cannot be empty"),
        image_url.check(FormField::ImageUrl, "Image URL cannot be empty"),
    ]
    .into_iter()
    .flatten()
    .collect();

    FormCheck { errors }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ACCEPTED: SubmittedField<'_> = SubmittedField::new(true, "ok");
    const EMPTY: SubmittedField<'_> = SubmittedField::new(false, "");
    const REJECTED: SubmittedField<'_> = SubmittedField::new(false, "bad");

    #[test]
    fn test_sign_in_all_valid() {
        let check = sign_in(ACCEPTED, ACCEPTED);
        assert!(check.is_valid());
        assert_eq!(check.focus_target(), None);
    }

    #[test]
    fn test_sign_in_empty_fields_get_messages() {
        let check = sign_in(EMPTY, EMPTY);
        assert!(!check.is_valid());
        assert_eq!(check.focus_target(), Some(FormField::Email));
        assert_eq!(
            check.message_for(FormField::Email),
            Some("Email address cannot be empty")
        );
        assert_eq!(
            check.message_for(FormField::Password),
            Some("Password cannot be empty")
        );
    }

    #[test]
    fn test_sign_in_rejected_field_keeps_validator_message() {
        let check = sign_in(REJECTED, ACCEPTED);
        assert!(!check.is_valid());
        assert_eq!(check.focus_target(), Some(FormField::Email));
        assert_eq!(check.message_for(FormField::Email), None);
    }

    #[test]
    fn test_sign_up_focus_order() {
        // Invalid email and empty confirm: focus goes to the email, the
        // earlier field in form order.
        let check = sign_up(true, ACCEPTED, ACCEPTED, REJECTED, ACCEPTED, EMPTY);
        assert_eq!(check.focus_target(), Some(FormField::Email));
        assert_eq!(check.errors().len(), 2);
    }

    #[test]
    fn test_sign_up_empty_first_name_and_password() {
        // Both fields get their errors, but only the first name is focused.
        let confirm = SubmittedField::new(true, "");
        let check = sign_up(true, EMPTY, ACCEPTED, ACCEPTED, EMPTY, confirm);

        assert_eq!(check.focus_target(), Some(FormField::FirstName));
        assert_eq!(
            check.message_for(FormField::FirstName),
            Some("First name cannot be empty")
        );
        assert_eq!(
            check.message_for(FormField::Password),
            Some("Password cannot be empty")
        );
    }

    #[test]
    fn test_sign_up_account_type_first() {
        let check = sign_up(false, EMPTY, ACCEPTED, ACCEPTED, ACCEPTED, ACCEPTED);
        assert_eq!(check.focus_target(), Some(FormField::AccountType));
        assert_eq!(
            check.message_for(FormField::AccountType),
            Some("Please select an account type")
        );
    }

    #[test]
    fn test_sign_up_password_edited_after_confirm() {
        // Both fields individually accepted but raw texts diverge.
        let password = SubmittedField::new(true, "Hunter2x");
        let confirm = SubmittedField::new(true, "Hunter2y");
        let check = sign_up(true, ACCEPTED, ACCEPTED, ACCEPTED, password, confirm);
        assert_eq!(check.focus_target(), Some(FormField::ConfirmPassword));
        assert_eq!(
            check.message_for(FormField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_reset_password_otp_message() {
        let check = reset_password(EMPTY, ACCEPTED, ACCEPTED);
        assert_eq!(check.focus_target(), Some(FormField::Otp));
        assert_eq!(check.message_for(FormField::Otp), Some("Invalid OTP"));

        // Same message when the OTP is present but rejected.
        let check = reset_password(REJECTED, ACCEPTED, ACCEPTED);
        assert_eq!(check.message_for(FormField::Otp), Some("Invalid OTP"));
    }

    #[test]
    fn test_checkout_order() {
        let check = checkout(ACCEPTED, EMPTY, ACCEPTED, EMPTY, ACCEPTED, ACCEPTED);
        assert_eq!(check.focus_target(), Some(FormField::Zip));
        assert_eq!(
            check.message_for(FormField::Zip),
            Some("Zip code cannot be empty")
        );
        assert_eq!(
            check.message_for(FormField::Card),
            Some("Card number cannot be empty")
        );
    }

    #[test]
    fn test_listing_gate() {
        let check = listing(EMPTY, REJECTED, ACCEPTED);
        assert_eq!(check.focus_target(), Some(FormField::ProductName));
        assert_eq!(
            check.message_for(FormField::ProductName),
            Some("Product name cannot be empty")
        );
        assert_eq!(check.message_for(FormField::Price), None);
    }
}
