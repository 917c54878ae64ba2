//! SwapMart CLI - command-line client for the marketplace backend.
//!
//! # Usage
//!
//! ```bash
//! # Sign in as a customer
//! sm-cli sign-in -e ada@example.com -p Hunter2x
//!
//! # Sign in as a seller
//! sm-cli sign-in -e bo@example.com -p Hunter2x --seller
//!
//! # Browse the store
//! sm-cli listings all
//!
//! # Create a listing (seller)
//! sm-cli listings create -n "Desk Lamp" -p 24.99 -i https://img.example.com/lamp.png
//! ```
//!
//! # Environment Variables
//!
//! - `SWAPMART_API_URL` - Base URL of the marketplace REST backend
//! - `SWAPMART_SESSION_FILE` - Session file path (default: `.swapmart-session.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swapmart_core::AccountType;

mod commands;

#[derive(Parser)]
#[command(name = "sm-cli")]
#[command(author, version, about = "SwapMart marketplace CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    SignIn {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Sign in to a seller account instead of a customer account
        #[arg(long)]
        seller: bool,
    },
    /// Sign out and clear the persisted session
    SignOut,
    /// Register a new account
    SignUp {
        /// First name
        #[arg(short, long)]
        first_name: String,

        /// Last name
        #[arg(short, long)]
        last_name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Register a seller account instead of a customer account
        #[arg(long)]
        seller: bool,
    },
    /// Show the signed-in user
    Whoami,
    /// Request a password-reset OTP
    SendOtp {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
    /// Reset the password with an emailed OTP
    ResetPassword {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// The 4-digit OTP from the reset email
        #[arg(short, long)]
        otp: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
    /// Send feedback about the store
    Feedback {
        /// Feedback text
        text: String,
    },
    /// Browse and manage listings
    Listings {
        #[command(subcommand)]
        action: ListingAction,
    },
}

#[derive(Subcommand)]
enum ListingAction {
    /// List every listing in the store
    All,
    /// List your own listings (seller)
    Mine,
    /// Create a listing (seller)
    Create {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Price (e.g. `24.99`)
        #[arg(short, long)]
        price: String,

        /// Absolute URL of the product image
        #[arg(short, long)]
        image_url: String,
    },
    /// Delete one of your listings (seller)
    Delete {
        /// Listing ID
        id: i64,
    },
}

const fn account_type(seller: bool) -> AccountType {
    if seller {
        AccountType::Seller
    } else {
        AccountType::Customer
    }
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "swapmart=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::SignIn {
            email,
            password,
            seller,
        } => commands::auth::sign_in(&email, &password, account_type(seller)).await?,
        Commands::SignOut => commands::auth::sign_out().await?,
        Commands::SignUp {
            first_name,
            last_name,
            email,
            password,
            seller,
        } => {
            commands::auth::sign_up(
                account_type(seller),
                &first_name,
                &last_name,
                &email,
                &password,
            )
            .await?;
        }
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::SendOtp { email } => commands::auth::send_otp(&email).await?,
        Commands::ResetPassword {
            email,
            otp,
            password,
        } => commands::auth::reset_password(&email, &otp, &password).await?,
        Commands::Feedback { text } => commands::auth::feedback(&text).await?,
        Commands::Listings { action } => match action {
            ListingAction::All => commands::listings::all().await?,
            ListingAction::Mine => commands::listings::mine().await?,
            ListingAction::Create {
                name,
                price,
                image_url,
            } => commands::listings::create(&name, &price, &image_url).await?,
            ListingAction::Delete { id } => commands::listings::delete(id).await?,
        },
    }
    Ok(())
}
