pub mod config;
pub mod credential;
pub mod dates;
pub mod entry;
pub mod pagination;
pub mod parse;
pub mod sidebar;
pub mod store;

pub use config::Config;
pub use credential::CredentialStore;
pub use dates::EntryDate;
pub use entry::Entry;
pub use store::{EntryStore, QueryError, QueryResult, StoreError};
