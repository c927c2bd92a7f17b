//! View models.
//!
//! Each view owns its local state and changes it only after the matching
//! gateway call succeeded, so a failed request leaves the screen as it was.

mod books;
mod categories;
mod navigation;
mod profile;
mod reviews;

pub use books::{AddBookOutcome, BooksView};
pub use categories::CategoriesView;
pub use navigation::{Header, HeaderItem, Route};
pub use profile::{Profile, ProfileView, Section};
pub use reviews::ReviewsView;
