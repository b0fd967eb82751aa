pub mod user;

pub use user::{seed_users, NewUser, User, UserPatch};
