// SPDX-License-Identifier: MIT

//! File-backed profile repository.
//!
//! The sole boundary between in-memory profiles and persisted bytes. There
//! is no per-document persistence primitive: every mutation is a whole-store
//! load-mutate-save cycle, and the backing file is rewritten entirely on
//! each save.
//!
//! All mutating cycles run under one async mutex per store, so a cycle can
//! never interleave with another writer. Without it, two concurrent cycles
//! would both load the old store and the last save would silently drop the
//! other's change.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::codec::{self, Store};
use crate::error::{AppError, Result};
use crate::models::Profile;
use crate::time_utils::now_rfc3339;

/// File-backed profile store.
///
/// Cheap to clone; clones share the same write lock.
#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the whole store.
    ///
    /// Never fails: a missing or unreadable backing file yields an empty
    /// store so reads stay available even when the file is corrupt.
    pub async fn load(&self) -> Store {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => codec::decode(&bytes),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        error = %err,
                        path = %self.path.display(),
                        "Failed to read store file, treating as empty"
                    );
                }
                Store::new()
            }
        }
    }

    /// Encode and overwrite the backing bytes entirely.
    async fn save(&self, store: &Store) -> Result<()> {
        let bytes = codec::encode(store)
            .map_err(|e| AppError::Persistence(format!("Failed to encode store: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::Persistence(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to write store file: {}", e)))
    }

    /// Get one profile by id.
    pub async fn get(&self, user_id: &str) -> Option<Profile> {
        self.load().await.get(user_id).cloned()
    }

    /// Apply `mutator` to the profile at `user_id`, creating a fresh
    /// default profile first if absent. Returns the profile after the save.
    pub async fn upsert<F>(&self, user_id: &str, mutator: F) -> Result<Profile>
    where
        F: FnOnce(&mut Profile) -> Result<()>,
    {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await;
        let profile = store
            .entry(user_id.to_string())
            .or_insert_with(|| Profile::new(user_id, &now_rfc3339()));
        mutator(profile)?;
        let updated = profile.clone();
        self.save(&store).await?;
        Ok(updated)
    }

    /// Apply `mutator` to an existing profile; `UserNotFound` if absent.
    ///
    /// The mutator's value is returned after a successful save. A mutator
    /// error abandons the cycle without writing anything.
    pub async fn update<F, T>(&self, user_id: &str, mutator: F) -> Result<T>
    where
        F: FnOnce(&mut Profile) -> Result<T>,
    {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await;
        let profile = store
            .get_mut(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        let out = mutator(profile)?;
        self.save(&store).await?;
        Ok(out)
    }

    /// Remove a profile wholesale.
    ///
    /// Also clears the removed id from every other profile's follower and
    /// following lists so no dangling edges survive the deletion. Returns
    /// `false` if no document existed.
    pub async fn remove(&self, user_id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await;
        if store.remove(user_id).is_none() {
            return Ok(false);
        }

        let now = now_rfc3339();
        for profile in store.values_mut() {
            profile.remove_follower(user_id, &now);
            profile.remove_following(user_id, &now);
        }

        self.save(&store).await?;
        Ok(true)
    }

    /// Run one serialized mutate cycle over the whole store.
    ///
    /// For cross-document maintenance (edge repair); single-document
    /// operations go through `upsert`/`update`.
    pub async fn mutate_all<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Store) -> T,
    {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await;
        let out = f(&mut store);
        self.save(&store).await?;
        Ok(out)
    }
}
