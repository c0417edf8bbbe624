// handlers/public/mod.rs - endpoints that do not require a bearer token
//
// Route prefixes: /auth/* (token acquisition) and POST /api/users (sign-up).
pub mod login;
pub mod users;

pub use login::login_post;
pub use users::user_create;
