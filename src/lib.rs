pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::user_service::{ServiceError, UserService};
pub use domain::user::{seed_users, NewUser, User, UserPatch};
pub use storage::memory::InMemoryUserStore;
pub use storage::store::{StoreError, UserStore};
