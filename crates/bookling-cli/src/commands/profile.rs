use anyhow::{Result, bail};
use bookling_application::Notice;
use clap::Subcommand;
use colored::Colorize;

use super::{failed, print_books, print_categories, print_notice, print_reviews, section_error};
use crate::app::AppState;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show your favorite categories and reviews
    Show,
    /// Change your username
    Rename { username: String },
    /// Delete your account and sign out
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List books of one of your categories
    Books { category_id: i64 },
}

pub async fn run(state: &AppState, action: Option<ProfileAction>) -> Result<()> {
    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => {
            let view = state.profile_view().map_err(|e| failed("load profile", &e))?;
            let profile = view.load().await.map_err(|e| failed("load profile", &e))?;

            println!(
                "{} {}",
                profile.user.username.bold(),
                format!("(id {})", profile.user.id).bright_black()
            );
            println!();
            println!("{}", "Favorite categories".underline());
            match &profile.favorites {
                Ok(categories) => print_categories(categories, |_| true),
                Err(e) => section_error("Favorite categories", e),
            }
            println!();
            println!("{}", "Reviews".underline());
            match &profile.reviews {
                Ok(reviews) => print_reviews(reviews),
                Err(e) => section_error("Reviews", e),
            }
        }
        ProfileAction::Rename { username } => {
            let auth = state.auth().map_err(|e| failed("update profile", &e))?;
            let user = auth
                .rename(&username)
                .await
                .map_err(|e| failed("update profile", &e))?;
            print_notice(&Notice::success(format!(
                "Profile updated. You are now {}.",
                user.username
            )));
        }
        ProfileAction::Delete { yes } => {
            if !yes {
                bail!("Refusing to delete the account without --yes");
            }
            let auth = state.auth().map_err(|e| failed("delete account", &e))?;
            auth.delete_account()
                .await
                .map_err(|e| failed("delete account", &e))?;
            print_notice(&Notice::success("Account deleted."));
        }
        ProfileAction::Books { category_id } => {
            let view = state.profile_view().map_err(|e| failed("load books", &e))?;
            let books = view
                .books_in(category_id)
                .await
                .map_err(|e| failed("load books", &e))?;
            print_books(&books);
        }
    }
    Ok(())
}
