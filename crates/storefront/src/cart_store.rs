//! Durable cart storage.
//!
//! Each cart is persisted as a single JSON file named after its ID under
//! the configured store directory. The file holds the same array-of-lines
//! shape the cart serializes to, so a hand-edited or stale file from an
//! older release still loads.
//!
//! Loads are fail-soft: a missing file is an empty cart, and an unreadable
//! or malformed file is logged and treated as empty rather than surfaced
//! to the shopper. Saves are explicit; callers persist after every
//! mutation.

use std::path::{Path, PathBuf};

use nordic_home_core::Cart;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when persisting a cart.
///
/// Load failures are deliberately absent: they degrade to an empty cart.
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("failed to write cart file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed cart store.
#[derive(Debug, Clone)]
pub struct FsCartStore {
    dir: PathBuf,
}

impl FsCartStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, CartStoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, cart_id: Uuid) -> PathBuf {
        self.dir.join(format!("{cart_id}.json"))
    }

    /// Load the cart with the given ID.
    ///
    /// Returns an empty cart when no file exists or the stored payload
    /// cannot be read or parsed.
    pub async fn load(&self, cart_id: Uuid) -> Cart {
        let path = self.path_for(cart_id);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Cart::new(),
            Err(e) => {
                tracing::warn!(%cart_id, error = %e, "failed to read cart file, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(%cart_id, error = %e, "malformed cart file, starting empty");
                Cart::new()
            }
        }
    }

    /// Persist the cart under its ID, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, cart_id: Uuid, cart: &Cart) -> Result<(), CartStoreError> {
        let path = self.path_for(cart_id);
        let json = serde_json::to_string(cart)?;
        tokio::fs::write(&path, json).await?;
        Ok(())
    }

    /// Delete the persisted cart, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub async fn delete(&self, cart_id: Uuid) -> Result<(), CartStoreError> {
        match tokio::fs::remove_file(self.path_for(cart_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
