pub mod journal_service;
pub mod user_service;

pub use journal_service::JournalService;
pub use user_service::{CreateUser, UserError, UserService};
