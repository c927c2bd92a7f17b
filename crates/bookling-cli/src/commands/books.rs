use anyhow::Result;
use bookling_application::Notice;
use bookling_core::catalog::NewBook;
use clap::Subcommand;

use super::{failed, print_books, print_notice};
use crate::app::AppState;

#[derive(Subcommand)]
pub enum BooksAction {
    /// List all books
    List,
    /// Add a book, optionally in a category
    Add {
        title: String,
        author: String,
        /// Category id to attach after creation
        #[arg(long)]
        category: Option<i64>,
    },
    /// Change title and author of a book
    Edit { id: i64, title: String, author: String },
    /// Delete a book
    Delete { id: i64 },
    /// Remove a category from a book
    RemoveCategory { id: i64, category_id: i64 },
    /// List books of a category
    InCategory { category_id: i64 },
}

pub async fn run(state: &AppState, action: BooksAction) -> Result<()> {
    let mut view = state.books_view().map_err(|e| failed("load books", &e))?;

    match action {
        BooksAction::List => {
            view.refresh()
                .await
                .map_err(|e| failed("load books", &e))?;
            print_books(view.books());
        }
        BooksAction::Add {
            title,
            author,
            category,
        } => {
            let mut book = NewBook::new(title, author);
            if let Some(category_id) = category {
                book = book.with_category(category_id);
            }
            let outcome = view.add(book).await.map_err(|e| failed("add book", &e))?;
            print_notice(&outcome.notice());
        }
        BooksAction::Edit { id, title, author } => {
            view.refresh()
                .await
                .map_err(|e| failed("load books", &e))?;
            view.update(id, &title, &author)
                .await
                .map_err(|e| failed("update book", &e))?;
            print_notice(&Notice::success("Book updated."));
        }
        BooksAction::Delete { id } => {
            view.delete(id)
                .await
                .map_err(|e| failed("delete book", &e))?;
            print_notice(&Notice::success("Book deleted."));
        }
        BooksAction::RemoveCategory { id, category_id } => {
            view.detach_category(id, category_id)
                .await
                .map_err(|e| failed("remove category", &e))?;
            print_notice(&Notice::success("Category removed from book."));
        }
        BooksAction::InCategory { category_id } => {
            let books = view
                .books_in_category(category_id)
                .await
                .map_err(|e| failed("load books", &e))?;
            print_books(&books);
        }
    }
    Ok(())
}
