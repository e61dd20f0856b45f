use anyhow::Result;
use hibi_core::{Config, CredentialStore, EntryStore};
use std::sync::Arc;

/// Shared handler context.
///
/// The stores are stateless handles over the filesystem, so a single
/// instance serves every request; cloning is an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    store: EntryStore,
    credentials: CredentialStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let credentials = CredentialStore::new(config.password_file.clone());
        let store = EntryStore::with_config(config)?;
        Ok(Self {
            inner: Arc::new(Inner { store, credentials }),
        })
    }

    pub fn store(&self) -> &EntryStore {
        &self.inner.store
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.inner.credentials
    }
}
