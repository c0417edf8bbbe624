pub mod contact;
pub mod group;
pub mod jot;
pub mod user;

pub use contact::Contact;
pub use group::Group;
pub use jot::{JotContact, JotDaily, JotGroup};
pub use user::{NewUser, User};
