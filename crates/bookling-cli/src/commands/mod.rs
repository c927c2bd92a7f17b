pub mod auth;
pub mod books;
pub mod categories;
pub mod profile;
pub mod reviews;

use anyhow::anyhow;
use bookling_application::notice::describe_error;
use bookling_application::{Notice, NoticeLevel};
use bookling_core::BooklingError;
use bookling_core::catalog::{Book, Category, Review};
use colored::Colorize;

/// Prints a notice in its level's color.
pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => println!("{}", notice.message.green()),
        NoticeLevel::Warning => eprintln!("{}", notice.message.yellow()),
        NoticeLevel::Error => eprintln!("{}", notice.message.red()),
    }
}

/// Turns a notice into the command's error so the process exits non-zero.
pub fn fail(notice: Notice) -> anyhow::Error {
    anyhow!(notice.message)
}

/// Generic failure wording for an action.
pub fn failed(action: &str, error: &BooklingError) -> anyhow::Error {
    fail(Notice::failed(action, error))
}

pub fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("{}", "No books yet.".bright_black());
        return;
    }
    for book in books {
        let categories = book
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let id = format!("#{}", book.id);
        if categories.is_empty() {
            println!("{:>5}  {} by {}", id.bright_black(), book.title.bold(), book.author);
        } else {
            println!(
                "{:>5}  {} by {} {}",
                id.bright_black(),
                book.title.bold(),
                book.author,
                format!("[{}]", categories).cyan()
            );
        }
    }
}

pub fn print_categories(categories: &[Category], is_favorite: impl Fn(i64) -> bool) {
    if categories.is_empty() {
        println!("{}", "No categories yet.".bright_black());
        return;
    }
    for category in categories {
        let marker = if is_favorite(category.id) {
            "*".yellow()
        } else {
            " ".normal()
        };
        println!(
            "{:>5} {} {}",
            format!("#{}", category.id).bright_black(),
            marker,
            category.name
        );
    }
}

pub fn print_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        println!("{}", "No reviews yet.".bright_black());
        return;
    }
    for review in reviews {
        println!(
            "{:>5}  {}",
            format!("#{}", review.id).bright_black(),
            review.content
        );
    }
}

/// Short wording used when a section could not be loaded.
pub fn section_error(title: &str, error: &BooklingError) {
    eprintln!(
        "{}",
        format!("{} unavailable: {}", title, describe_error(error)).yellow()
    );
}
