//! MediClean terminal portal
//!
//! Drives the same session lifecycle and booking ledger as the web portal:
//! - Log in, sign up, log out, show the current session
//! - Check which page a path resolves to and whether it would render
//! - Browse waste categories and bookings
//! - Generate a default config file
//!
//! The session is persisted as a file in the data directory, so it survives
//! between invocations. Bookings are not persisted.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mediclean::bookings::{
    parse_date, past_collections, recurring_plans, BookingLedger, DEFAULT_TIME_SLOT,
};
use mediclean::config::Config;
use mediclean::content::WASTE_CATEGORIES;
use mediclean::session::SESSION_KEY;
use mediclean::logging::init_tracing;
use mediclean::{
    authorize, AccessDecision, AuthAction, Booking, FileStore, Notice, Page,
    PlaceholderAuthenticator, SessionService, SignupRequest, WasteType,
};

type Service = SessionService<FileStore, PlaceholderAuthenticator>;

#[derive(Parser)]
#[command(name = "mediclean-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal portal for MediClean medical waste collection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the session file (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in (any non-empty credentials are accepted)
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account and log into it
    Signup {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Facility the account represents
        #[arg(long)]
        facility: Option<String>,
    },

    /// Log out
    Logout,

    /// Show the current session
    Whoami,

    /// Resolve a path and show what the portal would do with it
    Route {
        /// URL path, e.g. /dashboard
        path: String,
    },

    /// List the waste categories handled
    Categories,

    /// Work with collection bookings (requires a session)
    Bookings {
        #[command(subcommand)]
        action: Option<BookingAction>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum BookingAction {
    /// List bookings (default)
    List {
        /// Only bookings on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Schedule a collection
    Schedule {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time slot, e.g. "10:00 AM"
        #[arg(short, long, default_value = DEFAULT_TIME_SLOT)]
        time: String,
        /// general, sharps, pharmaceutical or hazardous
        #[arg(short = 'w', long = "type", default_value = "general")]
        waste_type: String,
    },

    /// Cancel a booking by id
    Cancel { id: String },

    /// Past collections
    History,

    /// Recurring collection plans
    Plans,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load_default();
    init_tracing(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_dir));
    let mut service = SessionService::new(FileStore::new(&data_dir), PlaceholderAuthenticator);
    service.restore();

    let json = cli.format == "json";

    match cli.command {
        Commands::Login { email, password } => {
            match service.login(&email, &password).await {
                Ok(record) => {
                    print_notice(&Notice::auth_succeeded(AuthAction::Login));
                    println!("Signed in as {} <{}>", record.name, record.email);
                }
                Err(e) => {
                    tracing::debug!("Login failed: {}", e);
                    fail(&Notice::auth_failed(AuthAction::Login, &e));
                }
            }
        }

        Commands::Signup {
            email,
            password,
            name,
            facility,
        } => {
            let mut request = SignupRequest::new(email, password, name);
            if let Some(facility) = facility {
                request = request.facility(facility);
            }

            match service.signup(request).await {
                Ok(record) => {
                    print_notice(&Notice::auth_succeeded(AuthAction::Signup));
                    println!("Account {} created for {}", record.id, record.email);
                }
                Err(e) => {
                    tracing::debug!("Signup failed: {}", e);
                    fail(&Notice::auth_failed(AuthAction::Signup, &e));
                }
            }
        }

        Commands::Logout => {
            service.logout();
            print_notice(&Notice::logged_out());
        }

        Commands::Whoami => match service.current() {
            Some(record) if json => println!("{}", serde_json::to_string_pretty(record)?),
            Some(record) => {
                println!("{}", record.display_name());
                println!("  Name:     {}", record.name);
                println!("  Email:    {}", record.email);
                println!("  Facility: {}", record.facility_name.as_deref().unwrap_or("-"));
                println!("  Role:     {}", record.role.label());
                println!("  ID:       {}", record.id);
                println!("  Stored:   {}", service.store().path_for(SESSION_KEY).display());
            }
            None => println!("Not logged in."),
        },

        Commands::Route { path } => {
            let page = Page::parse(&path);
            let decision = match authorize(page, service.state()) {
                AccessDecision::Render => "render".to_string(),
                AccessDecision::Pending => "pending".to_string(),
                AccessDecision::Redirect(target) => format!("redirect to {}", target),
            };
            println!("{} -> {} ({})", path, page.title(), decision);
        }

        Commands::Categories => {
            if json {
                println!("{}", serde_json::to_string_pretty(WASTE_CATEGORIES)?);
            } else {
                for category in WASTE_CATEGORIES {
                    println!("{} {} [{}]", category.icon, category.title, category.risk);
                    println!("  {}", category.description);
                    println!("  Examples: {}", category.examples.join(", "));
                    println!("  {}", category.risk.banner());
                    println!();
                }
            }
        }

        Commands::Bookings { action } => {
            require_session(&service, Page::Bookings);
            run_bookings(action.unwrap_or(BookingAction::List { date: None }), json)?;
        }

        Commands::Config { output } => {
            let config = mediclean::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn run_bookings(action: BookingAction, json: bool) -> anyhow::Result<()> {
    let mut ledger = BookingLedger::with_samples();

    match action {
        BookingAction::List { date } => {
            let bookings: Vec<&Booking> = match date {
                Some(date) => ledger.on_date(parse_date(&date)?),
                None => ledger.iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&bookings)?);
            } else if bookings.is_empty() {
                println!("No bookings for this date.");
            } else {
                print_bookings(&bookings);
            }
        }

        BookingAction::Schedule {
            date,
            time,
            waste_type,
        } => {
            let date = parse_date(&date)?;
            let waste_type: WasteType = waste_type.parse()?;
            match ledger.schedule(date, &time, waste_type) {
                Ok(booking) => {
                    print_notice(&Notice::booking_scheduled(booking));
                    println!();
                    print_bookings(&ledger.iter().collect::<Vec<_>>());
                }
                Err(e) => fail(&Notice::booking_failed(&e)),
            }
        }

        BookingAction::Cancel { id } => match ledger.cancel(&id) {
            Ok(booking) => {
                print_notice(&Notice::booking_canceled(booking));
                println!();
                print_bookings(&ledger.iter().collect::<Vec<_>>());
            }
            Err(e) => fail(&Notice::booking_failed(&e)),
        },

        BookingAction::History => {
            let history = past_collections();
            if json {
                println!("{}", serde_json::to_string_pretty(&history)?);
            } else {
                println!("{:<12} {:<10} {:<16} {:<10} {}", "Date", "Time", "Type", "Status", "Weight");
                println!("{}", "-".repeat(60));
                for row in history {
                    println!(
                        "{:<12} {:<10} {:<16} {:<10} {} kg",
                        row.date.format("%Y-%m-%d"),
                        row.time,
                        row.waste_type.short_label(),
                        row.status.label(),
                        row.weight_kg
                    );
                }
            }
        }

        BookingAction::Plans => {
            let plans = recurring_plans();
            if json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
            } else {
                for plan in plans {
                    println!("{:<32} {:<30} {}", plan.title, plan.cadence, plan.status.label());
                }
            }
        }
    }

    Ok(())
}

fn print_bookings(bookings: &[&Booking]) {
    println!("{:<10} {:<12} {:<10} {:<16} {}", "ID", "Date", "Time", "Type", "Status");
    println!("{}", "-".repeat(60));
    for booking in bookings {
        println!(
            "{:<10} {:<12} {:<10} {:<16} {}",
            booking.id,
            booking.date.format("%Y-%m-%d"),
            booking.time,
            booking.waste_type.short_label(),
            booking.status.label()
        );
    }
}

/// Exit unless the gate lets the current session see `page`
fn require_session(service: &Service, page: Page) {
    if let AccessDecision::Redirect(target) = authorize(page, service.state()) {
        eprintln!("{} requires a session. Log in first:", page.title());
        eprintln!("  mediclean-cli login --email you@example.com --password ...");
        eprintln!("(the web portal would redirect to {})", target);
        std::process::exit(1);
    }
}

fn print_notice(notice: &Notice) {
    println!("{}", notice.title);
    if let Some(description) = &notice.description {
        println!("  {}", description);
    }
}

fn fail(notice: &Notice) -> ! {
    eprintln!("{}", notice.title);
    if let Some(description) = &notice.description {
        eprintln!("  {}", description);
    }
    std::process::exit(1);
}
