//! Catalog domain module.
//!
//! Books, categories and reviews are owned by the server; the client only
//! holds copies fetched through the gateway.

mod book;
mod category;
mod review;

pub use book::{Book, NewBook};
pub use category::{Category, CategoryName};
pub use review::{Review, ReviewContent};
