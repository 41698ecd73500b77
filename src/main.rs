mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::App;

#[derive(Parser)]
#[command(name = "gobarber")]
#[command(about = "Manage your GoBarber schedule and profile from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as a provider (prompts for the password)
    SignIn { email: String },

    /// Forget the stored session
    SignOut,

    /// Show the appointments of a day and the month's unavailable days
    Dashboard {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Update name, e-mail and optionally the password
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Prompt for the current and a new password
        #[arg(long)]
        change_password: bool,
    },

    /// Upload a new profile picture
    Avatar { file: PathBuf },

    /// Send a password recovery e-mail
    ForgotPassword { email: String },

    /// Set a new password using the token from the recovery e-mail
    ResetPassword {
        #[arg(long)]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::load()?;
    debug!(api_url = %app.config.api_url, session = %app.sessions.path().display(), "Loaded configuration");

    match cli.command {
        Commands::SignIn { email } => commands::sign_in::run(&app, email).await,
        Commands::SignOut => commands::sign_out::run(&app),
        Commands::Dashboard { date } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            commands::dashboard::run(&app, date).await
        }
        Commands::Profile {
            name,
            email,
            change_password,
        } => commands::profile::run(&app, name, email, change_password).await,
        Commands::Avatar { file } => commands::avatar::run(&app, &file).await,
        Commands::ForgotPassword { email } => commands::forgot_password::run(&app, email).await,
        Commands::ResetPassword { token } => commands::reset_password::run(&app, &token).await,
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
