use anyhow::Result;
use bookling_application::Notice;
use clap::Subcommand;

use super::{failed, print_books, print_categories, print_notice};
use crate::app::AppState;

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories; favorites are starred when signed in
    List,
    /// Create a category
    Add { name: String },
    /// Rename a category
    Rename { id: i64, name: String },
    /// Delete a category
    Delete { id: i64 },
    /// Add or remove a category from your favorites
    Favorite { id: i64 },
    /// List books of a category
    Books { id: i64 },
}

pub async fn run(state: &AppState, action: CategoriesAction) -> Result<()> {
    let mut view = state
        .categories_view()
        .map_err(|e| failed("load categories", &e))?;

    match action {
        CategoriesAction::List => {
            view.refresh()
                .await
                .map_err(|e| failed("load categories", &e))?;
            print_categories(view.categories(), |id| view.is_favorite(id));
        }
        CategoriesAction::Add { name } => {
            view.create(&name)
                .await
                .map_err(|e| failed("create category", &e))?;
            print_notice(&Notice::success(format!("Category '{}' created.", name)));
        }
        CategoriesAction::Rename { id, name } => {
            view.rename(id, &name)
                .await
                .map_err(|e| failed("rename category", &e))?;
            print_notice(&Notice::success("Category renamed."));
        }
        CategoriesAction::Delete { id } => {
            view.delete(id)
                .await
                .map_err(|e| failed("delete category", &e))?;
            print_notice(&Notice::success("Category deleted."));
        }
        CategoriesAction::Favorite { id } => {
            // Current favorites decide whether this adds or removes.
            view.refresh()
                .await
                .map_err(|e| failed("load categories", &e))?;
            let now_favorite = view
                .toggle_favorite(id)
                .await
                .map_err(|e| failed("update favorites", &e))?;
            let message = if now_favorite {
                "Added to favorites."
            } else {
                "Removed from favorites."
            };
            print_notice(&Notice::success(message));
        }
        CategoriesAction::Books { id } => {
            let books = view
                .books_in(id)
                .await
                .map_err(|e| failed("load books", &e))?;
            print_books(&books);
        }
    }
    Ok(())
}
