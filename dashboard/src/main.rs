use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use dashboard::app::{App, AppContext, Phase};
use dashboard::debug::{self, LogConfig};
use dashboard::export;
use dashboard::ui::{render_dashboard, Theme};
use lib_core::config::Config;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "XP dashboard - sign in and inspect your platform statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and show the dashboard
    Login {
        /// Username or email
        #[arg(short, long)]
        user: String,
        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show whether a valid session is stored
    Status,
    /// Load and show the dashboard
    Show {
        /// Day range for the XP section
        #[arg(short, long)]
        range: Option<u32>,
        /// Print the view-model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load the dashboard and write it to a JSON file
    Export {
        /// Day range for the XP section
        #[arg(short, long)]
        range: Option<u32>,
        /// Output file (default: dashboard-stats-<date>.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show, set or toggle the theme preference
    Theme {
        /// `dark` or `light`
        value: Option<Theme>,
        /// Switch to the other theme
        #[arg(long, conflicts_with = "value")]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("invalid configuration")?;
    let _log_guard = debug::init(&LogConfig::from_config(&config));
    let ctx = AppContext::new(config).context("failed to initialize")?;

    match cli.command {
        Commands::Login { user, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password()?,
            };
            let mut app = App::new(ctx);
            app.login(&user, &password).await;
            print_dashboard(&app, false)?;
        }
        Commands::Logout => {
            App::new(ctx).logout();
            println!("Logged out.");
        }
        Commands::Status => status(&ctx),
        Commands::Show { range, json } => {
            let app = load(ctx, range).await?;
            print_dashboard(&app, json)?;
        }
        Commands::Export { range, out } => {
            let app = load(ctx, range).await?;
            ensure_ready(&app)?;
            let view = app.last_view().context("no dashboard loaded")?;
            let path = out.unwrap_or_else(|| {
                PathBuf::from(export::default_file_name(lib_utils::time::now_utc().date_naive()))
            });
            let written = export::write_export(view, &path)?;
            println!("Exported dashboard to {}", written.display());
        }
        Commands::Theme { value, toggle } => {
            let app = App::new(ctx);
            if toggle {
                app.toggle_theme()?;
            } else if let Some(theme) = value {
                app.set_theme(theme)?;
            }
            println!("{}", app.theme());
        }
    }

    Ok(())
}

/// Start the app and load the dashboard for `range` (or the configured default).
async fn load(ctx: AppContext, range: Option<u32>) -> Result<App> {
    let mut app = App::new(ctx);
    if !app.phase().is_logged_in() {
        bail!("Not logged in. Run `dashboard login --user <name>` first.");
    }

    match range {
        Some(days) => app.set_range(days).await?,
        None => app.resume().await,
    }
    Ok(app)
}

fn status(ctx: &AppContext) {
    let sessions = ctx.session_store();
    if !sessions.has_valid_session() {
        println!("Not logged in.");
        return;
    }

    match sessions.expires_at() {
        Some(expiry) => println!(
            "Logged in; session expires {}.",
            expiry.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("Logged in; session has no expiry."),
    }
}

fn print_dashboard(app: &App, json: bool) -> Result<()> {
    ensure_ready(app)?;
    if let Phase::Ready(view) = app.phase() {
        if json {
            println!("{}", export::to_pretty_json(view)?);
        } else {
            print!("{}", render_dashboard(view));
        }
    }
    Ok(())
}

/// Fail with the phase's message unless the dashboard is ready.
fn ensure_ready(app: &App) -> Result<()> {
    match app.phase() {
        Phase::Ready(_) => Ok(()),
        phase => bail!(phase.message().unwrap_or("Not logged in.").to_string()),
    }
}

fn read_password() -> Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
