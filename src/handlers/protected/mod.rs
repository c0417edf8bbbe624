// handlers/protected/mod.rs - bearer-token handlers
//
// Every handler here reads `Extension<AuthUser>` injected by
// `jwt_auth_middleware` and passes it into the service layer. All resources
// are read-only; the router answers other verbs with 405.
pub mod contacts;
pub mod groups;
pub mod jots;
pub mod users;

pub use contacts::{contact_get, contacts_list};
pub use groups::{group_get, groups_list};
pub use jots::{
    contact_jots_get, contact_jots_list, daily_jot_get, daily_jots_list, group_jots_get, group_jots_list,
};
pub use users::user_get;
