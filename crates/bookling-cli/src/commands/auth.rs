use anyhow::Result;
use bookling_application::{LoginOutcome, Notice};
use bookling_application::notice;
use bookling_application::views::{Header, HeaderItem};
use bookling_core::user::Credentials;
use colored::Colorize;

use super::{fail, print_notice};
use crate::app::AppState;

pub async fn login(state: &AppState, username: String, password: String) -> Result<()> {
    let auth = state.auth().map_err(|e| fail(notice::login_error(&e)))?;
    let outcome = auth
        .login(&Credentials::new(username, password))
        .await
        .map_err(|e| fail(notice::login_error(&e)))?;

    print_notice(&Notice::success(format!(
        "Signed in as {}.",
        outcome.user.username
    )));
    report_unsaved(&outcome)
}

pub async fn register(state: &AppState, username: String, password: String) -> Result<()> {
    let auth = state.auth().map_err(|e| fail(notice::register_error(&e)))?;
    let outcome = auth
        .register(&Credentials::new(username, password))
        .await
        .map_err(|e| fail(notice::register_error(&e)))?;

    print_notice(&Notice::success(format!(
        "Account created. Signed in as {}.",
        outcome.user.username
    )));
    report_unsaved(&outcome)
}

/// Each invocation starts from the stored session, so an unsaved login is
/// a failed command.
fn report_unsaved(outcome: &LoginOutcome) -> Result<()> {
    match outcome.warning() {
        Some(warning) => Err(fail(warning)),
        None => Ok(()),
    }
}

/// Local sign-out; works without a configured server.
pub fn logout(state: &AppState) -> Result<()> {
    let was_signed_in = state.session.is_authenticated();
    state.session.logout()?;
    if was_signed_in {
        print_notice(&Notice::success("Signed out."));
    } else {
        println!("{}", "Not signed in.".bright_black());
    }
    Ok(())
}

pub fn whoami(state: &AppState) -> Result<()> {
    match state.session.current_user() {
        Some(user) => {
            println!("{} {}", user.username.bold(), format!("(id {})", user.id).bright_black());
            for (key, value) in &user.profile {
                println!("  {}: {}", key, value);
            }
        }
        None => println!("{}", notice::NOT_SIGNED_IN.bright_black()),
    }
    Ok(())
}

/// Prints the header entries for the current session.
pub fn menu(state: &AppState) -> Result<()> {
    let session = state.session.state();
    for item in Header::items(&session) {
        match item {
            HeaderItem::Link(route) => {
                println!("  {:<12} {}", item.label(), route.path().bright_black())
            }
            HeaderItem::Logout => println!("  {}", item.label().yellow()),
        }
    }
    Ok(())
}

/// Prints the effective configuration and file locations.
pub fn show_config(state: &AppState) -> Result<()> {
    match state.api_base_url() {
        Ok(url) => println!("API address:  {}", url),
        Err(e) => println!("API address:  {}", e.to_string().red()),
    }
    println!("Timeout:      {}s", state.config.api.timeout_secs);
    println!("Log level:    {}", state.config.logging.level);
    if let Ok(path) = state.paths.config_file() {
        println!("Config file:  {}", path.display());
    }
    if let Ok(path) = state.paths.storage_file() {
        println!("Storage file: {}", path.display());
    }
    if let Ok(path) = state.paths.logs_dir() {
        println!("Logs:         {}", path.display());
    }
    Ok(())
}
