//! Account commands: sign-in, sign-out, sign-up, password reset, whoami,
//! and feedback.

#![allow(clippy::print_stdout)]

use swapmart_client::api::SignUpOutcome;
use swapmart_client::validate::fields;
use swapmart_core::AccountType;

use super::{CliError, client, require};

/// Sign in and persist the session.
pub async fn sign_in(
    email: &str,
    password: &str,
    account_type: AccountType,
) -> Result<(), CliError> {
    let email = require(fields::email(email), "Invalid email address")?;
    if password.is_empty() {
        return Err(CliError::Invalid("Password cannot be empty"));
    }

    let client = client()?;
    let remember_me = client.session().remember_me();
    let user = client
        .sign_in(&email, password, account_type, remember_me)
        .await?;

    println!(
        "Signed in as {} {} <{}> ({})",
        user.first_name, user.last_name, user.email, user.account_type
    );
    Ok(())
}

/// Sign out and clear the persisted session.
pub async fn sign_out() -> Result<(), CliError> {
    client()?.sign_out().await;
    println!("Signed out.");
    Ok(())
}

/// Register a new account.
pub async fn sign_up(
    account_type: AccountType,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let first_name = require(fields::name(first_name), "First name cannot be empty")?;
    let last_name = require(fields::name(last_name), "Last name cannot be empty")?;
    let email = require(fields::email(email), "Invalid email address")?;
    let password = require(
        fields::sign_up_password(password, Some(&email)),
        "Password cannot be empty",
    )?;

    let outcome = client()?
        .sign_up(account_type, &first_name, &last_name, &email, &password)
        .await?;

    match outcome {
        SignUpOutcome::Registered => println!("Account created. Please sign in."),
        SignUpOutcome::ConfirmationEmailSent => {
            println!("Confirmation email sent. Follow it to complete registration.");
        }
    }
    Ok(())
}

/// Request a password-reset OTP.
pub async fn send_otp(email: &str) -> Result<(), CliError> {
    let email = require(fields::email(email), "Invalid email address")?;
    client()?.send_reset_otp(&email).await?;
    println!("OTP sent. Please check your email.");
    Ok(())
}

/// Reset the password with an emailed OTP.
pub async fn reset_password(email: &str, otp: &str, password: &str) -> Result<(), CliError> {
    let email = require(fields::email(email), "Invalid email address")?;
    let otp = require(fields::otp(otp), "Invalid OTP")?;
    let password = require(
        fields::sign_up_password(password, Some(&email)),
        "Password cannot be empty",
    )?;

    client()?.reset_password(&email, otp, &password).await?;
    println!("Password reset. Please sign in.");
    Ok(())
}

/// Show the signed-in user, restoring the session if needed.
pub async fn whoami() -> Result<(), CliError> {
    match client()?.bootstrap().await? {
        Some(user) => {
            println!("{} {} <{}>", user.first_name, user.last_name, user.email);
            println!("Account type: {}", user.account_type);
            if let Some(phone) = &user.phone_number {
                println!("Phone: {phone}");
            }
            if let Some(address) = &user.address {
                println!("Address: {address}");
            }
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

/// Send feedback (requires a signed-in session).
pub async fn feedback(text: &str) -> Result<(), CliError> {
    let text = require(
        fields::feedback(text),
        "Feedback must be at least 5 characters long",
    )?;
    client()?.send_feedback(&text).await?;
    println!("Feedback sent. Thank you!");
    Ok(())
}
