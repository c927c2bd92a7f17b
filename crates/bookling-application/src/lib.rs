pub mod auth_usecase;
pub mod notice;
pub mod views;

pub use auth_usecase::{AuthUseCase, LoginOutcome};
pub use notice::{Notice, NoticeLevel};
