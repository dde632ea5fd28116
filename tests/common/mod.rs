// SPDX-License-Identifier: MIT

use std::sync::Arc;

use profilehub::config::Config;
use profilehub::AppState;
use tempfile::TempDir;

/// App state backed by a throwaway store file.
///
/// The TempDir must stay alive for the duration of the test.
#[allow(dead_code)]
pub fn test_state() -> (Arc<AppState>, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let config = Config {
        data_path: dir.path().join("profiles.json"),
    };
    (Arc::new(AppState::new(config)), dir)
}

/// Create an empty profile for `user_id`.
#[allow(dead_code)]
pub async fn seed_user(state: &AppState, user_id: &str) {
    state
        .profiles
        .create_or_update_profile(user_id, Default::default())
        .await
        .expect("seed profile");
}
