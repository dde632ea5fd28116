// SPDX-License-Identifier: MIT

//! Whole-store JSON codec.
//!
//! The persisted layout is `{ "users": [Profile, ...] }` — an array keyed
//! by each profile's own `id` field, kept for wire compatibility. In memory
//! the store is a genuine id-keyed map; the codec converts between the two
//! shapes.
//!
//! Decoding is fail-open at two levels: unreadable bytes yield an empty
//! store, and an individual user entry that does not deserialize is dropped
//! with a warning instead of failing the load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// In-memory representation of the persisted store.
///
/// A BTreeMap so encoded output is sorted by user id and diffs stay stable.
pub type Store = BTreeMap<String, Profile>;

#[derive(Debug, Default, Deserialize)]
struct StoreFile {
    #[serde(default)]
    users: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    users: Vec<&'a Profile>,
}

/// Decode persisted bytes into a store.
///
/// Never fails. Duplicate ids keep the later array entry.
pub fn decode(bytes: &[u8]) -> Store {
    let file: StoreFile = match serde_json::from_slice(bytes) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(error = %err, "Store bytes unreadable, starting from empty store");
            return Store::new();
        }
    };

    let mut store = Store::new();
    for value in file.users {
        match serde_json::from_value::<Profile>(value) {
            Ok(profile) if profile.id.is_empty() => {
                tracing::warn!("Dropping user entry without an id");
            }
            Ok(profile) => {
                store.insert(profile.id.clone(), profile);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Dropping malformed user entry");
            }
        }
    }
    store
}

/// Encode a store into persisted bytes (pretty-printed JSON).
pub fn encode(store: &Store) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(&StoreFileRef {
        users: store.values().collect(),
    })
}
