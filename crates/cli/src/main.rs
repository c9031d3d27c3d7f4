//! QuickBite CLI - the kiosk front end for the ordering engine.
//!
//! # Usage
//!
//! ```bash
//! # One-time bootstrap of the seed admin account
//! qb seed
//!
//! # Accounts
//! qb register -u alice -e alice@example.com -p hunter22 -c hunter22
//! qb login alice -p hunter22 --remember
//! qb whoami
//! qb logout
//!
//! # Browsing and ordering
//! qb menu --category burgers
//! qb cart add "Classic Burger" --qty 2
//! qb cart show
//! qb checkout --promo SAVOR10 --delivery
//! qb orders
//!
//! # Promotions (admin)
//! qb promo add -t "Two for one" -d "Every Tuesday" --start 2025-06-01 --end 2025-06-30
//! qb promo list --current
//! qb promo remove <id>
//! ```
//!
//! # Environment Variables
//!
//! - `QUICKBITE_DATA_DIR` - where the JSON store lives (default `data`)
//! - `QUICKBITE_DELIVERY_FEE` - delivery surcharge in minor units (default 200)
//! - `QUICKBITE_ADMIN_PASSWORD` - seed admin password (default `admin123`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// A terminal front end renders to stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use quickbite_core::PromotionId;
use quickbite_storefront::config::Config;
use quickbite_storefront::models::Category;
use quickbite_storefront::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "qb")]
#[command(author, version, about = "QuickBite ordering CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the seed admin account if no admin exists yet
    Seed,
    /// Register a new account
    Register {
        /// Username (3-20 letters, digits, underscores)
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 6 characters)
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm: String,
    },
    /// Sign in with a username or email
    Login {
        /// Username or email
        identifier: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Remember the identifier for the next login
        #[arg(long)]
        remember: bool,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Show the product menu
    Menu {
        /// Only show one category (`burgers`, `snacks`, `drinks`, `desserts`)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the cart contents
    Checkout {
        /// Promo code to apply (`SAVOR10`, `SAVOR20`)
        #[arg(long)]
        promo: Option<String>,

        /// Deliver instead of pickup
        #[arg(long)]
        delivery: bool,
    },
    /// List your placed orders
    Orders,
    /// Manage promotions
    Promo {
        #[command(subcommand)]
        action: PromoAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product by name
    Add {
        /// Product name (case-insensitive)
        product: String,

        /// How many units
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product's line
    Remove {
        /// Product name (case-insensitive)
        product: String,
    },
    /// Set a line's quantity (zero removes it)
    Qty {
        /// Product name (case-insensitive)
        product: String,

        /// New quantity
        qty: i64,
    },
    /// Show the cart contents and totals
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum PromoAction {
    /// Create a promotion (admin)
    Add {
        /// Banner headline
        #[arg(short, long)]
        title: String,

        /// Banner body text
        #[arg(short, long)]
        description: String,

        /// Banner image URI
        #[arg(short, long)]
        image: Option<String>,

        /// First day, `YYYY-MM-DD`
        #[arg(long)]
        start: NaiveDate,

        /// Last day, `YYYY-MM-DD`
        #[arg(long)]
        end: NaiveDate,
    },
    /// Delete a promotion (admin)
    Remove {
        /// Promotion ID
        id: PromotionId,
    },
    /// List promotions
    List {
        /// Only promotions running today
        #[arg(long)]
        current: bool,

        /// Every promotion, including switched-off ones (admin view)
        #[arg(long)]
        all: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> quickbite_storefront::Result<()> {
    let config = Config::from_env()?;
    let state = AppState::open(config)?;

    match cli.command {
        Commands::Seed => commands::account::seed(&state)?,
        Commands::Register {
            username,
            email,
            password,
            confirm,
        } => commands::account::register(&state, username, email, password, confirm)?,
        Commands::Login {
            identifier,
            password,
            remember,
        } => commands::account::login(&state, &identifier, &password, remember)?,
        Commands::Logout => commands::account::logout(&state)?,
        Commands::Whoami => commands::account::whoami(&state)?,
        Commands::Menu { category } => commands::menu::show(&state, category)?,
        Commands::Cart { action } => match action {
            CartAction::Add { product, qty } => commands::cart::add(&state, &product, qty)?,
            CartAction::Remove { product } => commands::cart::remove(&state, &product)?,
            CartAction::Qty { product, qty } => commands::cart::set_qty(&state, &product, qty)?,
            CartAction::Show => commands::cart::show(&state)?,
            CartAction::Clear => commands::cart::clear(&state)?,
        },
        Commands::Checkout { promo, delivery } => {
            commands::cart::checkout(&state, promo.as_deref(), delivery)?;
        }
        Commands::Orders => commands::cart::orders(&state)?,
        Commands::Promo { action } => match action {
            PromoAction::Add {
                title,
                description,
                image,
                start,
                end,
            } => commands::promo::add(&state, title, description, image, start, end)?,
            PromoAction::Remove { id } => commands::promo::remove(&state, id)?,
            PromoAction::List { current, all } => commands::promo::list(&state, current, all)?,
        },
    }
    Ok(())
}
