// SPDX-License-Identifier: MIT

//! Follow-edge mutations, symmetry, cascade cleanup, and repair.

use profilehub::error::AppError;
use profilehub::services::ProfilePatch;
use profilehub::time_utils::now_rfc3339;

mod common;
use common::{seed_user, test_state};

#[tokio::test]
async fn test_toggle_follow_creates_symmetric_edge() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;
    seed_user(&state, "bob").await;

    let outcome = state.social.toggle_follow("alice", "bob").await.unwrap();
    assert!(outcome.now_following);

    let alice = state.profiles.get_profile("alice").await.unwrap();
    let bob = state.profiles.get_profile("bob").await.unwrap();

    assert_eq!(alice.following, vec!["bob"]);
    assert_eq!(alice.stats.following, 1);
    assert_eq!(bob.followers, vec!["alice"]);
    assert_eq!(bob.stats.followers, 1);
}

#[tokio::test]
async fn test_toggle_follow_twice_removes_edge() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;
    seed_user(&state, "bob").await;

    state.social.toggle_follow("alice", "bob").await.unwrap();
    let outcome = state.social.toggle_follow("alice", "bob").await.unwrap();
    assert!(!outcome.now_following);

    let alice = state.profiles.get_profile("alice").await.unwrap();
    let bob = state.profiles.get_profile("bob").await.unwrap();

    assert!(alice.following.is_empty());
    assert_eq!(alice.stats.following, 0);
    assert!(bob.followers.is_empty());
    assert_eq!(bob.stats.followers, 0);
}

#[tokio::test]
async fn test_self_follow_rejected() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;

    let err = state.social.toggle_follow("alice", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_follow_unknown_user_rejected_before_any_write() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;

    let err = state.social.toggle_follow("alice", "ghost").await.unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(_)));

    let alice = state.profiles.get_profile("alice").await.unwrap();
    assert!(alice.following.is_empty());
}

#[tokio::test]
async fn test_connect_is_idempotent() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;
    seed_user(&state, "bob").await;

    state.social.connect_with_user("alice", "bob").await.unwrap();
    let outcome = state.social.connect_with_user("alice", "bob").await.unwrap();
    assert!(outcome.now_following);

    let bob = state.profiles.get_profile("bob").await.unwrap();
    assert_eq!(bob.followers, vec!["alice"]);
    assert_eq!(bob.stats.followers, 1);
}

#[tokio::test]
async fn test_followers_resolved_to_summaries() {
    let (state, _dir) = test_state();
    state
        .profiles
        .create_or_update_profile(
            "alice",
            ProfilePatch {
                display_name: Some("Alice".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    seed_user(&state, "bob").await;

    state.social.toggle_follow("alice", "bob").await.unwrap();

    let followers = state.social.get_followers("bob").await.unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, "alice");
    assert_eq!(followers[0].display_name, "Alice");

    let following = state.social.get_following("alice").await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].id, "bob");
}

#[tokio::test]
async fn test_profile_deletion_cascades_to_edges() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;
    seed_user(&state, "bob").await;
    seed_user(&state, "carol").await;

    state.social.toggle_follow("alice", "bob").await.unwrap();
    state.social.toggle_follow("bob", "carol").await.unwrap();

    assert!(state.profiles.delete_profile("bob").await.unwrap());

    let alice = state.profiles.get_profile("alice").await.unwrap();
    assert!(alice.following.is_empty());
    assert_eq!(alice.stats.following, 0);

    let carol = state.profiles.get_profile("carol").await.unwrap();
    assert!(carol.followers.is_empty());
    assert_eq!(carol.stats.followers, 0);
}

#[tokio::test]
async fn test_reconcile_restores_lost_mirror_write() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;
    seed_user(&state, "bob").await;

    // Simulate a follow whose second (mirror) write was lost: the edge
    // exists on bob's side only.
    let now = now_rfc3339();
    state
        .store
        .update("bob", |bob| {
            bob.add_follower("alice", &now);
            Ok(())
        })
        .await
        .unwrap();

    let report = state.profiles.reconcile().await.unwrap();
    assert!(report.repaired_profiles >= 1);

    let alice = state.profiles.get_profile("alice").await.unwrap();
    assert_eq!(alice.following, vec!["bob"]);
    assert_eq!(alice.stats.following, 1);
}

#[tokio::test]
async fn test_reconcile_fixes_counter_drift() {
    let (state, _dir) = test_state();
    seed_user(&state, "alice").await;

    let now = now_rfc3339();
    state
        .store
        .update("alice", |alice| {
            alice.stats.projects = 42; // simulate drift
            alice.touch(&now);
            Ok(())
        })
        .await
        .unwrap();

    state.profiles.reconcile().await.unwrap();

    let alice = state.profiles.get_profile("alice").await.unwrap();
    assert_eq!(alice.stats.projects, 0);
}
