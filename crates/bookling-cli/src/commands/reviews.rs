use anyhow::Result;
use bookling_application::Notice;
use bookling_core::gateway::BooksApi;
use clap::Subcommand;
use colored::Colorize;

use super::{failed, print_notice, print_reviews};
use crate::app::AppState;

#[derive(Subcommand)]
pub enum ReviewsAction {
    /// Show a book and its reviews
    Book { book_id: i64 },
    /// List reviews written by a user
    User { user_id: i64 },
    /// Review a book as the signed-in user
    Add { book_id: i64, text: String },
    /// Change the text of a review
    Edit { id: i64, text: String },
    /// Delete a review
    Delete { id: i64 },
}

pub async fn run(state: &AppState, action: ReviewsAction) -> Result<()> {
    let mut view = state
        .reviews_view()
        .map_err(|e| failed("load reviews", &e))?;

    match action {
        ReviewsAction::Book { book_id } => {
            let book = BooksApi::new(state.gateway()?)
                .get(book_id)
                .await
                .map_err(|e| failed("load book", &e))?;
            view.open(book)
                .await
                .map_err(|e| failed("load reviews", &e))?;
            if let Some(book) = view.book() {
                println!("{} by {}", book.title.bold(), book.author);
            }
            print_reviews(view.reviews());
        }
        ReviewsAction::User { user_id } => {
            let reviews = view
                .by_user(user_id)
                .await
                .map_err(|e| failed("load reviews", &e))?;
            print_reviews(&reviews);
        }
        ReviewsAction::Add { book_id, text } => {
            let book = BooksApi::new(state.gateway()?)
                .get(book_id)
                .await
                .map_err(|e| failed("load book", &e))?;
            view.open(book)
                .await
                .map_err(|e| failed("load reviews", &e))?;
            view.add(&text)
                .await
                .map_err(|e| failed("add review", &e))?;
            print_notice(&Notice::success("Review added."));
        }
        ReviewsAction::Edit { id, text } => {
            view.edit(id, &text)
                .await
                .map_err(|e| failed("update review", &e))?;
            print_notice(&Notice::success("Review updated."));
        }
        ReviewsAction::Delete { id } => {
            view.delete(id)
                .await
                .map_err(|e| failed("delete review", &e))?;
            print_notice(&Notice::success("Review deleted."));
        }
    }
    Ok(())
}
