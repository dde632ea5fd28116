// SPDX-License-Identifier: MIT

//! Concurrency regression test for the single-writer store.
//!
//! Without the store's write lock, two concurrent load-mutate-save cycles
//! would both read the old document and the last save would silently drop
//! the other's change. With the lock, every concurrent write survives.

use profilehub::models::SkillLevel;
use profilehub::services::NewSkill;

mod common;
use common::{seed_user, test_state};

const NUM_CONCURRENT_WRITES: usize = 10;

#[tokio::test]
async fn test_concurrent_add_skill_loses_no_writes() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let mut handles = vec![];
    for i in 0..NUM_CONCURRENT_WRITES {
        let skills = state.skills.clone();
        handles.push(tokio::spawn(async move {
            skills
                .add_skill(
                    "u1",
                    NewSkill {
                        name: format!("Skill {}", i),
                        level: SkillLevel::Intermediate,
                        category: "test".to_string(),
                    },
                )
                .await
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("task join failed")
            .expect("add_skill failed");
    }

    let skills = state.skills.list_skills("u1").await.unwrap();
    assert_eq!(
        skills.len(),
        NUM_CONCURRENT_WRITES,
        "a concurrent write was lost"
    );
    for i in 0..NUM_CONCURRENT_WRITES {
        let name = format!("Skill {}", i);
        assert!(
            skills.iter().any(|s| s.name == name),
            "missing {}",
            name
        );
    }
}

#[tokio::test]
async fn test_concurrent_project_creates_keep_counter_consistent() {
    let (state, _dir) = test_state();
    seed_user(&state, "u1").await;

    let mut handles = vec![];
    for i in 0..NUM_CONCURRENT_WRITES {
        let projects = state.projects.clone();
        handles.push(tokio::spawn(async move {
            projects
                .create_project(
                    "u1",
                    profilehub::services::NewProject {
                        title: format!("Project {}", i),
                        description: String::new(),
                        status: Default::default(),
                        category: String::new(),
                        tags: vec![],
                        links: vec![],
                        image_url: None,
                    },
                )
                .await
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("task join failed")
            .expect("create_project failed");
    }

    let profile = state.profiles.get_profile("u1").await.unwrap();
    assert_eq!(profile.projects.len(), NUM_CONCURRENT_WRITES);
    assert_eq!(profile.stats.projects as usize, NUM_CONCURRENT_WRITES);
}
