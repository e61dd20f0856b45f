//! Admin credential persistence.
//!
//! A single credential file holds `hex(salt)$hex(sha256(salt ‖ password))`.
//! A missing file means no password has been set, which is a valid state,
//! not an error. Comparing a candidate against the stored value is the only
//! supported check; there is no session or token machinery here.

use anyhow::{Context, Result};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const SALT_LEN: usize = 16;

/// The credential file exists but does not hold a `salt$digest` pair.
#[derive(Debug, Error)]
#[error("credential file {path} is malformed")]
pub struct MalformedCredential {
    pub path: PathBuf,
}

/// A parsed on-disk credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl StoredCredential {
    /// Hashes `password` under a fresh random salt.
    pub fn new(password: &str) -> Self {
        let mut salt = vec![0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        let digest = hash_password(&salt, password);
        Self { salt, digest }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        hash_password(&self.salt, candidate) == self.digest
    }

    /// Hex form of the digest; the HTTP layer uses it as its admin cookie value.
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest)
    }

    fn encode(&self) -> String {
        format!("{}${}", hex::encode(&self.salt), hex::encode(&self.digest))
    }

    fn decode(raw: &str) -> Option<Self> {
        let (salt, digest) = raw.trim().split_once('$')?;
        let salt = hex::decode(salt).ok()?;
        let digest = hex::decode(digest).ok()?;
        if salt.is_empty() || digest.is_empty() {
            return None;
        }
        Some(Self { salt, digest })
    }
}

fn hash_password(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// Reads and writes the single admin credential file.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Overwrites the credential file with a freshly salted hash of `password`.
    pub fn save(&self, password: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let cred = StoredCredential::new(password);
        fs::write(&self.path, cred.encode())
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Returns the stored credential, or `None` when no password is set.
    pub fn load(&self) -> Result<Option<StoredCredential>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let cred = StoredCredential::decode(&raw).ok_or(MalformedCredential {
            path: self.path.clone(),
        })?;
        Ok(Some(cred))
    }

    /// Checks `candidate` against the stored credential.
    /// Always false when no password is set.
    pub fn verify(&self, candidate: &str) -> Result<bool> {
        Ok(self
            .load()?
            .map(|cred| cred.matches(candidate))
            .unwrap_or(false))
    }
}
