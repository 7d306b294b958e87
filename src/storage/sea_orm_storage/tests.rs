use super::SeaOrmStorage;
use crate::models::{
    activities::{
        entities::{ActivityType, Difficulty, ResourceType},
        requests::{ActivityRequest, CreateActivityResourceRequest, UpdateActivityResourceRequest},
    },
    competences::{
        entities::{LevelType, PrerequisiteType},
        requests::{
            CompetenceRequest, CompetenceResourceRequest, LevelRequest, PrerequisiteRequest,
            SubCompetenceRequest,
        },
    },
    evaluations::{
        entities::{EvaluationStatus, PrerequisiteLevel},
        requests::EvaluationRequest,
    },
    submissions::entities::{GradedAnswer, NewSubmission, SaveOutcome, SubmissionStatus},
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::storage::Storage;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::new_in_memory().await.unwrap()
}

async fn seed_competence(storage: &SeaOrmStorage, code: &str) -> i64 {
    storage
        .create_competence(CompetenceRequest {
            code: code.to_string(),
            name: format!("Competence {code}"),
            description: None,
        })
        .await
        .unwrap()
        .id
}

async fn seed_activity(storage: &SeaOrmStorage, competence_id: i64) -> i64 {
    storage
        .create_activity(ActivityRequest {
            competence_id,
            title: "Boucles en Rust".to_string(),
            description: Some("for / while / loop".to_string()),
            activity_type: ActivityType::Exercice,
            duration: 45,
            level: Difficulty::Medium,
        })
        .await
        .unwrap()
        .id
}

async fn seed_evaluation(storage: &SeaOrmStorage, activity_id: i64) -> i64 {
    storage
        .create_evaluation(EvaluationRequest {
            title: "Quiz boucles".to_string(),
            prerequisite_level: PrerequisiteLevel::Intermediate,
            activity_id,
            introduction: None,
        })
        .await
        .unwrap()
        .id
}

async fn seed_student(storage: &SeaOrmStorage, email: &str) -> i64 {
    storage
        .create_user(CreateUserRequest {
            email: email.to_string(),
            password: "hash".to_string(),
            full_name: "Ada Student".to_string(),
            role: UserRole::Student,
        })
        .await
        .unwrap()
        .id
}

fn new_submission(evaluation_id: i64, activity_id: i64, student_id: i64) -> NewSubmission {
    NewSubmission {
        evaluation_id,
        activity_id,
        prerequisite_level: PrerequisiteLevel::Intermediate,
        student_id,
        student_full_name: "Ada Student".to_string(),
        student_level: Some("beginner".to_string()),
    }
}

#[tokio::test]
async fn test_user_lookup_and_role_count() {
    let storage = storage().await;
    let id = seed_student(&storage, "ada@example.com").await;

    let user = storage
        .get_user_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.role, UserRole::Student);
    assert!(user.last_login.is_none());

    assert!(storage.update_last_login(id).await.unwrap());
    let user = storage.get_user_by_id(id).await.unwrap().unwrap();
    assert!(user.last_login.is_some());

    assert_eq!(storage.count_users().await.unwrap(), 1);
    assert_eq!(
        storage.count_users_by_role(UserRole::Student).await.unwrap(),
        1
    );
    assert_eq!(
        storage.count_users_by_role(UserRole::Admin).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_competence_roundtrip_and_update() {
    let storage = storage().await;
    let id = seed_competence(&storage, "RUST-01").await;

    let fetched = storage.get_competence_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.code, "RUST-01");
    assert_eq!(fetched.name, "Competence RUST-01");

    let updated = storage
        .update_competence(
            id,
            CompetenceRequest {
                code: "RUST-02".to_string(),
                name: "Ownership".to_string(),
                description: Some("borrowck".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.code, "RUST-02");
    assert_eq!(updated.description.as_deref(), Some("borrowck"));

    assert!(
        storage
            .update_competence(
                9999,
                CompetenceRequest {
                    code: "X".to_string(),
                    name: "X".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap()
            .is_none()
    );
    assert!(!storage.delete_competence(9999).await.unwrap());
}

#[tokio::test]
async fn test_delete_competence_cascades_children() {
    let storage = storage().await;
    let id = seed_competence(&storage, "A").await;
    let other = seed_competence(&storage, "B").await;

    storage
        .create_sub_competence(SubCompetenceRequest {
            competence_id: id,
            name: "Traits".to_string(),
            description: None,
        })
        .await
        .unwrap();
    storage
        .create_level(LevelRequest {
            competence_id: id,
            level_type: LevelType::Bloom,
            label: "Appliquer".to_string(),
            description: None,
        })
        .await
        .unwrap();
    storage
        .create_competence_resource(CompetenceResourceRequest {
            competence_id: id,
            title: "The Book".to_string(),
            url: Some("https://doc.rust-lang.org/book/".to_string()),
        })
        .await
        .unwrap();
    storage
        .create_prerequisite(PrerequisiteRequest {
            source_id: other,
            target_id: id,
            prerequisite_type: Some(PrerequisiteType::Obligatoire),
        })
        .await
        .unwrap();
    seed_activity(&storage, id).await;

    assert!(storage.delete_competence(id).await.unwrap());

    assert!(storage.list_sub_competences(Some(id)).await.unwrap().is_empty());
    assert!(storage.list_levels(Some(id)).await.unwrap().is_empty());
    assert!(
        storage
            .list_competence_resources(Some(id))
            .await
            .unwrap()
            .is_empty()
    );
    assert!(storage.list_prerequisites().await.unwrap().is_empty());
    assert!(storage.list_activities(Some(id)).await.unwrap().is_empty());
    assert!(storage.get_competence_by_id(other).await.unwrap().is_some());
}

#[tokio::test]
async fn test_children_filter_by_competence() {
    let storage = storage().await;
    let a = seed_competence(&storage, "A").await;
    let b = seed_competence(&storage, "B").await;

    for (competence_id, name) in [(a, "a1"), (a, "a2"), (b, "b1")] {
        storage
            .create_sub_competence(SubCompetenceRequest {
                competence_id,
                name: name.to_string(),
                description: None,
            })
            .await
            .unwrap();
    }

    assert_eq!(storage.list_sub_competences(Some(a)).await.unwrap().len(), 2);
    assert_eq!(storage.list_sub_competences(Some(b)).await.unwrap().len(), 1);
    assert_eq!(storage.list_sub_competences(None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_activity_resource_partial_update() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;

    let resource = storage
        .create_activity_resource(
            activity_id,
            CreateActivityResourceRequest {
                title: "Slides".to_string(),
                resource_type: ResourceType::Pdf,
                url: Some("https://example.com/slides.pdf".to_string()),
                description: Some("cours 1".to_string()),
            },
        )
        .await
        .unwrap();

    let updated = storage
        .update_activity_resource(
            resource.id,
            UpdateActivityResourceRequest {
                title: None,
                resource_type: None,
                url: Some("https://example.com/v2.pdf".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Slides");
    assert_eq!(updated.resource_type, ResourceType::Pdf);
    assert_eq!(updated.url.as_deref(), Some("https://example.com/v2.pdf"));
    assert!(updated.description.is_none());

    assert_eq!(
        storage
            .list_activity_resources(activity_id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_question_positions_and_counts() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;
    let evaluation_id = seed_evaluation(&storage, activity_id).await;
    let empty_id = seed_evaluation(&storage, activity_id).await;

    for label in ["q1", "q2", "q3"] {
        storage
            .create_question(
                evaluation_id,
                label.to_string(),
                vec!["a".to_string(), "b".to_string()],
                "a".to_string(),
            )
            .await
            .unwrap();
    }

    let questions = storage.list_questions(evaluation_id).await.unwrap();
    let positions: Vec<i32> = questions.iter().map(|q| q.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(questions[0].options, vec!["a".to_string(), "b".to_string()]);

    assert_eq!(storage.count_questions(evaluation_id).await.unwrap(), 3);
    let grouped = storage.count_questions_grouped().await.unwrap();
    assert_eq!(grouped.get(&evaluation_id), Some(&3));
    assert_eq!(grouped.get(&empty_id), None);
}

#[tokio::test]
async fn test_evaluation_status_and_listing_order() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;
    let first = seed_evaluation(&storage, activity_id).await;
    let second = seed_evaluation(&storage, activity_id).await;

    let created = storage.get_evaluation_by_id(first).await.unwrap().unwrap();
    assert_eq!(created.status, EvaluationStatus::Draft);

    let published = storage
        .set_evaluation_status(second, EvaluationStatus::Published)
        .await
        .unwrap()
        .unwrap();
    assert!(published.is_published());

    let all: Vec<i64> = storage
        .list_evaluations(None)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(all, vec![second, first]);

    let only_published = storage
        .list_evaluations(Some(EvaluationStatus::Published))
        .await
        .unwrap();
    assert_eq!(only_published.len(), 1);
    assert_eq!(only_published[0].id, second);
}

#[tokio::test]
async fn test_start_reuses_in_progress_submission() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;
    let evaluation_id = seed_evaluation(&storage, activity_id).await;
    let student_id = seed_student(&storage, "ada@example.com").await;

    let first = storage
        .start_or_resume_submission(new_submission(evaluation_id, activity_id, student_id))
        .await
        .unwrap();
    let again = storage
        .start_or_resume_submission(new_submission(evaluation_id, activity_id, student_id))
        .await
        .unwrap();

    assert_eq!(first.id, again.id);
    assert_eq!(first.status, SubmissionStatus::InProgress);
    assert_eq!(first.activity_id, activity_id);
    assert!(first.score.is_none());
}

#[tokio::test]
async fn test_save_result_replaces_answers_and_submits() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;
    let evaluation_id = seed_evaluation(&storage, activity_id).await;
    let student_id = seed_student(&storage, "ada@example.com").await;

    let submission = storage
        .start_or_resume_submission(new_submission(evaluation_id, activity_id, student_id))
        .await
        .unwrap();

    let answers = vec![
        GradedAnswer {
            question_id: 20,
            chosen_answer: String::new(),
            correct: false,
        },
        GradedAnswer {
            question_id: 10,
            chosen_answer: "a".to_string(),
            correct: true,
        },
    ];
    let SaveOutcome::Saved(saved) = storage
        .save_submission_result(submission.id, answers, 50)
        .await
        .unwrap()
    else {
        panic!("first save should succeed");
    };

    assert!(saved.is_submitted());
    assert_eq!(saved.score, Some(50));
    assert!(saved.submitted_at.is_some());

    let stored = storage.list_answers(submission.id).await.unwrap();
    let ids: Vec<i64> = stored.iter().map(|a| a.question_id).collect();
    assert_eq!(ids, vec![10, 20]);
    assert!(stored[0].correct);

    // 已提交后再开始会新建一次作答
    let next = storage
        .start_or_resume_submission(new_submission(evaluation_id, activity_id, student_id))
        .await
        .unwrap();
    assert_ne!(next.id, submission.id);

    assert!(matches!(
        storage.save_submission_result(9999, vec![], 0).await.unwrap(),
        SaveOutcome::NotFound
    ));
}

#[tokio::test]
async fn test_save_result_refuses_submitted_attempt() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;
    let evaluation_id = seed_evaluation(&storage, activity_id).await;
    let student_id = seed_student(&storage, "ada@example.com").await;

    let submission = storage
        .start_or_resume_submission(new_submission(evaluation_id, activity_id, student_id))
        .await
        .unwrap();

    let first = vec![GradedAnswer {
        question_id: 10,
        chosen_answer: "a".to_string(),
        correct: true,
    }];
    assert!(matches!(
        storage
            .save_submission_result(submission.id, first, 40)
            .await
            .unwrap(),
        SaveOutcome::Saved(_)
    ));

    let second = vec![GradedAnswer {
        question_id: 11,
        chosen_answer: "b".to_string(),
        correct: false,
    }];
    assert!(matches!(
        storage
            .save_submission_result(submission.id, second, 100)
            .await
            .unwrap(),
        SaveOutcome::AlreadySubmitted
    ));

    // 分数与答案保持第一次提交的结果
    let stored = storage
        .get_submission_by_id(submission.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.score, Some(40));
    let answers = storage.list_answers(submission.id).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].question_id, 10);
}

#[tokio::test]
async fn test_list_submissions_filters_and_evaluation_cascade() {
    let storage = storage().await;
    let competence_id = seed_competence(&storage, "A").await;
    let activity_id = seed_activity(&storage, competence_id).await;
    let eval_a = seed_evaluation(&storage, activity_id).await;
    let eval_b = seed_evaluation(&storage, activity_id).await;
    let ada = seed_student(&storage, "ada@example.com").await;
    let bob = seed_student(&storage, "bob@example.com").await;

    for (evaluation_id, student_id) in [(eval_a, ada), (eval_a, bob), (eval_b, ada)] {
        storage
            .start_or_resume_submission(new_submission(evaluation_id, activity_id, student_id))
            .await
            .unwrap();
    }

    assert_eq!(storage.list_submissions(None, None).await.unwrap().len(), 3);
    assert_eq!(
        storage
            .list_submissions(Some(eval_a), None)
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        storage.list_submissions(None, Some(ada)).await.unwrap().len(),
        2
    );
    assert_eq!(
        storage
            .list_submissions(Some(eval_b), Some(bob))
            .await
            .unwrap()
            .len(),
        0
    );

    assert!(storage.delete_evaluation(eval_a).await.unwrap());
    assert_eq!(storage.list_submissions(None, None).await.unwrap().len(), 1);
}
