use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod app;
mod commands;

use app::{AppBootstrap, AppState, BootstrapOptions};
use commands::books::BooksAction;
use commands::categories::CategoriesAction;
use commands::profile::ProfileAction;
use commands::reviews::ReviewsAction;

#[derive(Parser)]
#[command(name = "bookling")]
#[command(about = "Bookling - browse books, categories and reviews", long_about = None)]
#[command(after_help = "Sign in with the password in BOOKLING_PASSWORD, e.g.\n  BOOKLING_PASSWORD=... bookling login ann")]
struct Cli {
    /// Base address of the review API, e.g. http://localhost:8080
    #[arg(long, global = true, env = "BOOKLING_API_URL")]
    api_url: Option<String>,

    /// Directory holding config.toml, storage.toml and logs
    #[arg(long, global = true, env = "BOOKLING_HOME")]
    home: Option<PathBuf>,

    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        username: String,
        /// Password; prefer setting BOOKLING_PASSWORD over passing it here
        #[arg(long, env = "BOOKLING_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        username: String,
        /// Password; prefer setting BOOKLING_PASSWORD over passing it here
        #[arg(long, env = "BOOKLING_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the remembered session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the navigation entries for the current session
    Menu,
    /// Show the effective configuration
    Config,
    /// Your profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Books
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },
    /// Categories and favorites
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewsAction,
    },
}

impl Commands {
    /// Whether the command sends requests to the server.
    fn needs_server(&self) -> bool {
        !matches!(
            self,
            Commands::Logout | Commands::Whoami | Commands::Menu | Commands::Config
        )
    }
}

async fn dispatch(state: &AppState, command: Commands) -> Result<()> {
    match command {
        Commands::Login { username, password } => {
            commands::auth::login(state, username, password).await
        }
        Commands::Register { username, password } => {
            commands::auth::register(state, username, password).await
        }
        Commands::Logout => commands::auth::logout(state),
        Commands::Whoami => commands::auth::whoami(state),
        Commands::Menu => commands::auth::menu(state),
        Commands::Config => commands::auth::show_config(state),
        Commands::Profile { action } => commands::profile::run(state, action).await,
        Commands::Books { action } => commands::books::run(state, action).await,
        Commands::Categories { action } => commands::categories::run(state, action).await,
        Commands::Reviews { action } => commands::reviews::run(state, action).await,
    }
}


#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let bootstrap = match AppBootstrap::initialize(BootstrapOptions {
        api_url: cli.api_url,
        home: cli.home,
        verbose: cli.verbose,
        require_api: cli.command.needs_server(),
    }) {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = bootstrap.log_guard;

    match dispatch(&bootstrap.app_state, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("[Cli] Command failed: {:#}", e);
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
