use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use poupar::components::cookie_banner::{stored_choice, CookieChoice};
use poupar::config::{PouparPaths, Settings};
use poupar::display::{
    format_goal_plan, format_route_list, format_tutorial, format_voice_commands, GoalPlan,
};
use poupar::models::{Money, Route};
use poupar::state::ThemeContext;
use poupar::storage::client_storage::{COOKIES_ACCEPTED, COOKIES_DECLINED};
use poupar::storage::ClientStorage;

#[derive(Parser)]
#[command(
    name = "poupar",
    author = "MY POUPAR+ Team",
    version,
    about = "Gamified savings companion for the terminal",
    long_about = "MY POUPAR+ helps you save towards your dreams: set goals, get \
                  AI recommendations from Lumin, follow the onboarding tutorial \
                  and earn rewards, all from the terminal."
)]
struct Cli {
    /// Base URL of the POUPAR+ backend
    #[arg(long, global = true, env = "POUPAR_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,

    /// List every page of the app
    Routes,

    /// List voice commands, optionally only those offered on one page
    VoiceCommands {
        /// Page path, e.g. "/dreams"
        #[arg(short, long, value_parser = parse_route)]
        route: Option<Route>,
    },

    /// Show the onboarding steps and their rewards
    Tutorial,

    /// Work out the monthly saving needed for a goal
    PlanGoal {
        /// Target amount in euros (e.g. 1200 or 1200,50)
        #[arg(short, long, value_parser = parse_money)]
        amount: Money,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        target_date: NaiveDate,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start_date: Option<NaiveDate>,
    },

    /// Inspect or reset the cookie consent
    #[command(subcommand)]
    Cookies(CookieCommands),
}

#[derive(Subcommand)]
enum CookieCommands {
    /// Show the stored choice
    Status,
    /// Forget the choice so the banner shows again
    Reset,
}

fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

fn parse_route(s: &str) -> Result<Route, String> {
    Route::from_path(s).ok_or_else(|| format!("Unknown page: {}", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PouparPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?.with_api_base_url(cli.api_url);
    poupar::logging::init(&paths, &settings)?;

    match cli.command {
        None | Some(Commands::Tui) => poupar::tui::run_tui(&paths, &settings)?,
        Some(Commands::Config) => print_config(&paths, &settings)?,
        Some(Commands::Routes) => println!("{}", format_route_list()),
        Some(Commands::VoiceCommands { route }) => println!("{}", format_voice_commands(route)),
        Some(Commands::Tutorial) => println!("{}", format_tutorial()),
        Some(Commands::PlanGoal {
            amount,
            target_date,
            start_date,
        }) => {
            let start = start_date.unwrap_or_else(|| Local::now().date_naive());
            let plan = GoalPlan::compute(amount, start, target_date)?;
            println!("{}", format_goal_plan(&plan));
        }
        Some(Commands::Cookies(cmd)) => handle_cookie_command(&paths, cmd)?,
    }

    Ok(())
}

fn print_config(paths: &PouparPaths, settings: &Settings) -> Result<()> {
    let storage = ClientStorage::open(paths.client_storage_file())?;
    let theme = ThemeContext::load(&storage).theme();

    println!("MY POUPAR+ Configuration");
    println!("========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  API base URL:    {}", settings.api_root());
    println!("  Request timeout: {}s", settings.request_timeout_secs);
    println!("  Log level:       {}", settings.log_level);
    println!("  Language:        {}", settings.language);
    println!("  Volume:          {:.0}%", settings.volume * 100.0);
    println!("  Muted:           {}", settings.muted);
    println!("  Tracks:          {}", settings.tracks.len());
    println!("  Theme:           {}", theme.as_str());
    Ok(())
}

fn handle_cookie_command(paths: &PouparPaths, cmd: CookieCommands) -> Result<()> {
    let mut storage = ClientStorage::open(paths.client_storage_file())?;
    match cmd {
        CookieCommands::Status => {
            let status = match stored_choice(&storage) {
                Some(CookieChoice::Accepted) => "accepted",
                Some(CookieChoice::Declined) => "declined",
                None => "not set",
            };
            println!("Cookie consent: {}", status);
        }
        CookieCommands::Reset => {
            let accepted = storage.remove(COOKIES_ACCEPTED)?;
            let declined = storage.remove(COOKIES_DECLINED)?;
            if accepted || declined {
                println!("Cookie consent cleared. The banner will show on next launch.");
            } else {
                println!("No cookie consent stored.");
            }
        }
    }
    Ok(())
}
