//! Clinic CLI
//!
//! Command-line interface for the practice website:
//! - List upcoming weekend dates, slots and services
//! - Submit a booking and send its notifications
//! - Exercise the mock login against a running API
//! - Check API status

use chrono::Local;
use clap::{Parser, Subcommand};
use clinic::api::build_notifier;
use clinic::booking::{
    upcoming_weekends, BookingDesk, BookingDetails, ConsultationMode, SubmitOutcome,
    CLINIC_SLOTS, VIDEO_CALL_SLOTS, WEEKEND_DATE_COUNT,
};
use clinic::catalog;
use clinic::config::{generate_default_config, Config};
use clinic::notify::{LogNotifier, NotificationSaga, Notifier};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "clinic-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Practice website bookings from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List upcoming weekend dates
    Dates {
        /// Number of dates
        #[arg(short, long, default_value_t = WEEKEND_DATE_COUNT)]
        count: usize,
    },

    /// List clinic and video call time slots
    Slots,

    /// List services
    Services,

    /// Submit an appointment request
    Book {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Weekend date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time slot, e.g. "12:00 PM - 1:00 PM"
        #[arg(long)]
        slot: String,
        /// offline (in person) or online (video call)
        #[arg(long)]
        mode: Option<String>,
        #[arg(long, default_value = "")]
        message: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Log the emails instead of sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// Log in to the mock patient portal and list appointments
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show API status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Dates { count } => {
            let dates = upcoming_weekends(Local::now().date_naive(), count);

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&dates)?);
            } else {
                println!("{:<12} {}", "Date", "Label");
                println!("{}", "-".repeat(40));
                for date in dates {
                    println!("{:<12} {}", date.value, date.label);
                }
            }
        }

        Commands::Slots => {
            if cli.format == "json" {
                let body = serde_json::json!({
                    "clinic": CLINIC_SLOTS,
                    "video_call": VIDEO_CALL_SLOTS,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Clinic (weekends):");
                for slot in CLINIC_SLOTS {
                    println!("  {}", slot);
                }
                println!();
                println!("Video call:");
                for slot in VIDEO_CALL_SLOTS {
                    println!("  {:<14} {}", slot.value, slot.label);
                }
            }
        }

        Commands::Services => {
            let services = catalog::services();

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(services)?);
            } else {
                println!("{:<20} {}", "ID", "Title");
                println!("{}", "-".repeat(60));
                for service in services {
                    println!("{:<20} {}", service.id, service.title);
                }
            }
        }

        Commands::Book {
            name,
            email,
            phone,
            date,
            slot,
            mode,
            message,
            config,
            dry_run,
        } => {
            let config = match config {
                Some(path) => Config::load_with_env(&path)?,
                None => Config::load_default(),
            };

            let mode = match mode.as_deref() {
                None => None,
                Some(raw) => match ConsultationMode::parse(raw) {
                    Some(mode) => Some(mode),
                    None => {
                        eprintln!("Unknown mode '{}', expected offline or online", raw);
                        std::process::exit(1);
                    }
                },
            };

            let notifier: Arc<dyn Notifier> = if dry_run {
                Arc::new(LogNotifier)
            } else {
                build_notifier(&config)?
            };
            let saga = NotificationSaga::new(notifier, config.email.practitioners()?);
            let desk = BookingDesk::new(Arc::new(saga), config.booking.confirmation_display_secs);

            desk.fill(BookingDetails {
                name,
                email,
                phone,
                date,
                time_slot: slot,
                mode,
                message,
            })
            .await?;

            match desk.submit(Local::now().date_naive()).await {
                SubmitOutcome::Confirmed(report) => {
                    println!("Booking confirmed");
                    println!("  Key: {}", report.key);
                    for step in &report.delivered {
                        println!("  Sent: {}", step);
                    }
                    if dry_run {
                        println!();
                        println!("(Dry run - emails were logged, not sent)");
                    }
                }
                SubmitOutcome::Failed(err) => {
                    eprintln!("{}", err.user_message());
                    std::process::exit(1);
                }
                SubmitOutcome::Invalid(err) => {
                    eprintln!("Invalid booking: {}", err);
                    std::process::exit(1);
                }
                SubmitOutcome::AlreadySending => {
                    eprintln!("A booking is already being sent");
                    std::process::exit(1);
                }
            }
        }

        Commands::Login { email, password } => {
            let response = client
                .post(format!("{}/api/v1/session/login", cli.api_url))
                .json(&serde_json::json!({ "email": email, "password": password }))
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                eprintln!("Login failed ({}): {}", status, text);
                std::process::exit(1);
            }

            let session: serde_json::Value = response.json().await?;
            let id = session["session_id"].as_str().unwrap_or_default();

            let response = client
                .get(format!("{}/api/v1/session/{}/appointments", cli.api_url, id))
                .send()
                .await?;
            if !response.status().is_success() {
                eprintln!("Failed to fetch appointments: {}", response.status());
                std::process::exit(1);
            }
            let list: serde_json::Value = response.json().await?;

            if cli.format == "json" {
                let body = serde_json::json!({ "session": session, "appointments": list });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            println!(
                "Welcome back, {}",
                session["display_name"].as_str().unwrap_or("patient")
            );
            println!("Session: {}", id);
            println!();
            println!("{:<12} {:<10} {:<12} {:<12} {}", "Date", "Time", "Type", "Status", "Doctor");
            println!("{}", "-".repeat(64));
            for apt in list["appointments"].as_array().into_iter().flatten() {
                println!(
                    "{:<12} {:<10} {:<12} {:<12} {}",
                    apt["date"].as_str().unwrap_or("-"),
                    apt["time"].as_str().unwrap_or("-"),
                    apt["type"].as_str().unwrap_or("-"),
                    apt["status"].as_str().unwrap_or("-"),
                    apt["doctor_name"].as_str().unwrap_or("-"),
                );
            }
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Clinic v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Email:      {} ({})",
                        health["email"].as_str().unwrap_or("unknown"),
                        health["notifier"].as_str().unwrap_or("-")
                    );
                    if let Some(sessions) = health["sessions"].as_u64() {
                        println!("Sessions:   {}", sessions);
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to clinic API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin clinic");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    println!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
