pub mod memory;
pub mod store;

pub use memory::InMemoryUserStore;
pub use store::{StoreError, UserStore};
