// SPDX-License-Identifier: MIT

//! Project operations and the derived state they maintain.

use profilehub::error::AppError;
use profilehub::models::ProjectStatus;
use profilehub::services::{NewProject, ProjectPatch};

mod common;
use common::{seed_user, test_state};

fn make_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: String::new(),
        status: ProjectStatus::Planned,
        category: "c".to_string(),
        tags: vec![],
        links: vec![],
        image_url: None,
    }
}

#[tokio::test]
async fn test_project_counter_tracks_collection_across_sequence() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let project = state
            .projects
            .create_project("u1", make_project(&format!("Project {}", i)))
            .await
            .expect("create project");
        ids.push(project.id);

        let profile = state.profiles.get_profile("u1").await.unwrap();
        assert_eq!(profile.stats.projects as usize, profile.projects.len());
    }

    for id in &ids {
        assert!(state.projects.delete_project("u1", id).await.unwrap());
        let profile = state.profiles.get_profile("u1").await.unwrap();
        assert_eq!(profile.stats.projects as usize, profile.projects.len());
    }

    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert_eq!(profile.stats.projects, 0);
    assert!(profile.projects.is_empty());
}

#[tokio::test]
async fn test_end_to_end_create_then_delete() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let project = state
        .projects
        .create_project("u1", make_project("X"))
        .await
        .expect("create project");
    assert!(!project.id.is_empty());

    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert_eq!(profile.stats.projects, 1);
    assert_eq!(profile.projects.len(), 1);
    assert_eq!(profile.projects[0].title, "X");
    // The activity log is only written when explicitly recorded
    assert!(profile.recent_activity.is_empty());

    assert!(state
        .projects
        .delete_project("u1", &project.id)
        .await
        .unwrap());
    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert_eq!(profile.stats.projects, 0);
    assert!(profile.projects.is_empty());
}

#[tokio::test]
async fn test_delete_project_clears_recent_reference() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let project = state
        .projects
        .create_project("u1", make_project("Tracked"))
        .await
        .unwrap();
    state
        .projects
        .touch_recent_project("u1", &project.id)
        .await
        .unwrap();

    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert_eq!(profile.recent_project_ids, vec![project.id.clone()]);

    assert!(state
        .projects
        .delete_project("u1", &project.id)
        .await
        .unwrap());

    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert!(profile.projects.is_empty());
    assert!(profile.recent_project_ids.is_empty());
}

#[tokio::test]
async fn test_update_project_merges_partial_fields() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let project = state
        .projects
        .create_project("u1", make_project("Original"))
        .await
        .unwrap();

    let updated = state
        .projects
        .update_project(
            "u1",
            &project.id,
            ProjectPatch {
                status: Some(ProjectStatus::InProgress),
                tags: Some(vec!["rust".to_string()]),
                ..Default::default()
            },
        )
        .await
        .expect("update project");

    assert_eq!(updated.title, "Original"); // untouched field survives
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.tags, vec!["rust"]);
}

#[tokio::test]
async fn test_update_missing_project_is_not_found() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let err = state
        .projects
        .update_project("u1", "nope", ProjectPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_create_project_for_unknown_user_fails() {
    let (state, _dir) = test_state();

    let err = state
        .projects
        .create_project("ghost", make_project("X"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(_)));
}

#[tokio::test]
async fn test_create_project_rejects_empty_title() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let err = state
        .projects
        .create_project("u1", make_project(""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Rejected before any cycle: nothing was written
    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert_eq!(profile.stats.projects, 0);
}
