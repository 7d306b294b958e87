//! 看板数据的内存聚合

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::activities::entities::Activity;
use crate::models::analytics::responses::{
    DashboardOverview, ScoreBucket, StudentPerformance, TopActivity,
};
use crate::models::evaluations::entities::Evaluation;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::services::recommendations::engine::round2;

const BUCKET_LABELS: [&str; 5] = ["0-20", "21-40", "41-60", "61-80", "81-100"];

/// 上界包含：20 属于 0-20，21 属于 21-40
fn bucket_index(score: i32) -> usize {
    if score <= 20 {
        0
    } else {
        (((score - 1) / 20) as usize).min(BUCKET_LABELS.len() - 1)
    }
}

pub fn score_distribution<I>(scores: I) -> Vec<ScoreBucket>
where
    I: IntoIterator<Item = i32>,
{
    let mut counts = [0u64; 5];
    for score in scores {
        counts[bucket_index(score)] += 1;
    }

    BUCKET_LABELS
        .iter()
        .zip(counts)
        .map(|(range, count)| ScoreBucket {
            range: range.to_string(),
            count,
        })
        .collect()
}

fn average(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    round2(scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64)
}

/// 每个学生一行，按 student_id 升序
pub fn students_performance(submissions: &[Submission], at_risk_threshold: f64) -> Vec<StudentPerformance> {
    let mut by_student: BTreeMap<i64, Vec<&Submission>> = BTreeMap::new();
    for submission in submissions {
        by_student.entry(submission.student_id).or_default().push(submission);
    }

    by_student
        .into_iter()
        .map(|(student_id, mut rows)| {
            rows.sort_by_key(|s| (s.started_at, s.id));

            let scores: Vec<i32> = rows.iter().filter_map(|s| s.score).collect();
            let avg_score = average(&scores);
            let last_score = rows.iter().rev().find_map(|s| s.score);
            let student_full_name = rows
                .last()
                .map(|s| s.student_full_name.clone())
                .unwrap_or_default();

            StudentPerformance {
                student_id,
                student_full_name,
                submissions_count: rows.len() as u64,
                avg_score,
                last_score,
                at_risk: avg_score > 0.0 && avg_score < at_risk_threshold,
            }
        })
        .collect()
}

/// 按作答数降序，同数时按活动 id 升序
pub fn top_activities(submissions: &[Submission], activities: &[Activity]) -> Vec<TopActivity> {
    let titles: HashMap<i64, &str> = activities
        .iter()
        .map(|a| (a.id, a.title.as_str()))
        .collect();

    let mut by_activity: BTreeMap<i64, (u64, Vec<i32>)> = BTreeMap::new();
    for submission in submissions {
        let entry = by_activity.entry(submission.activity_id).or_default();
        entry.0 += 1;
        entry.1.extend(submission.score);
    }

    let mut top: Vec<TopActivity> = by_activity
        .into_iter()
        .map(|(activity_id, (count, scores))| TopActivity {
            activity_id,
            title: titles
                .get(&activity_id)
                .map(|t| t.to_string())
                .unwrap_or_else(|| format!("Activity {activity_id}")),
            submissions_count: count,
            avg_score: average(&scores),
        })
        .collect();

    top.sort_by(|a, b| b.submissions_count.cmp(&a.submissions_count));
    top
}

pub fn build_overview(
    evaluations: &[Evaluation],
    submissions: &[Submission],
    activities: &[Activity],
    registered_students: u64,
    at_risk_threshold: f64,
) -> DashboardOverview {
    let students_performance = students_performance(submissions, at_risk_threshold);
    let distinct_students: HashSet<i64> = submissions.iter().map(|s| s.student_id).collect();

    DashboardOverview {
        generated_at: chrono::Utc::now(),
        total_students: distinct_students.len() as u64,
        registered_students,
        total_evaluations: evaluations.len() as u64,
        published_evaluations: evaluations.iter().filter(|e| e.is_published()).count() as u64,
        total_activities: activities.len() as u64,
        total_submissions: submissions.len() as u64,
        submitted_count: submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::Submitted)
            .count() as u64,
        in_progress_count: submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::InProgress)
            .count() as u64,
        at_risk_students_count: students_performance.iter().filter(|s| s.at_risk).count() as u64,
        score_distribution: score_distribution(submissions.iter().filter_map(|s| s.score)),
        top_activities: top_activities(submissions, activities),
        students_performance,
    }
}

/// 读取失败时返回的空看板
pub fn empty_overview() -> DashboardOverview {
    DashboardOverview {
        generated_at: chrono::Utc::now(),
        score_distribution: score_distribution(std::iter::empty()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activities::entities::{ActivityType, Difficulty};
    use crate::models::evaluations::entities::{EvaluationStatus, PrerequisiteLevel};
    use chrono::{Duration, Utc};

    fn submission(id: i64, student_id: i64, activity_id: i64, score: Option<i32>, minutes: i64) -> Submission {
        Submission {
            id,
            evaluation_id: 1,
            activity_id,
            prerequisite_level: PrerequisiteLevel::Beginner,
            student_id,
            student_full_name: format!("Student {student_id}"),
            student_level: None,
            score,
            status: if score.is_some() {
                SubmissionStatus::Submitted
            } else {
                SubmissionStatus::InProgress
            },
            started_at: Utc::now() + Duration::minutes(minutes),
            submitted_at: None,
        }
    }

    fn activity(id: i64, title: &str) -> Activity {
        Activity {
            id,
            competence_id: 1,
            title: title.into(),
            description: None,
            activity_type: ActivityType::Quiz,
            duration: 15,
            level: Difficulty::Easy,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn evaluation(id: i64, status: EvaluationStatus) -> Evaluation {
        Evaluation {
            id,
            activity_id: 1,
            title: format!("Eval {id}"),
            prerequisite_level: PrerequisiteLevel::Beginner,
            introduction: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_score_buckets_inclusive_upper_bounds() {
        let buckets = score_distribution([0, 20, 21, 40, 41, 60, 61, 80, 81, 100, 100]);
        let counts: Vec<u64> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 2, 2, 2, 3]);
        assert_eq!(buckets[4].range, "81-100");

        let empty = score_distribution(std::iter::empty());
        assert_eq!(empty.len(), 5);
        assert!(empty.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_student_performance() {
        let submissions = vec![
            submission(1, 10, 1, Some(30), 0),
            submission(2, 10, 1, Some(45), 10),
            submission(3, 10, 2, None, 20),
            submission(4, 11, 1, Some(90), 0),
            submission(5, 12, 2, None, 0),
        ];
        let perf = students_performance(&submissions, 50.0);

        assert_eq!(perf.len(), 3);
        assert_eq!(perf[0].student_id, 10);
        assert_eq!(perf[0].submissions_count, 3);
        assert_eq!(perf[0].avg_score, 37.5);
        assert_eq!(perf[0].last_score, Some(45));
        assert!(perf[0].at_risk);
        assert!(!perf[1].at_risk);
        // 没有分数的学生平均分为 0，不算有风险
        assert_eq!(perf[2].avg_score, 0.0);
        assert_eq!(perf[2].last_score, None);
        assert!(!perf[2].at_risk);
    }

    #[test]
    fn test_top_activities() {
        let submissions = vec![
            submission(1, 10, 2, Some(40), 0),
            submission(2, 11, 5, Some(80), 0),
            submission(3, 12, 5, Some(61), 0),
            submission(4, 13, 9, None, 0),
        ];
        let top = top_activities(&submissions, &[activity(5, "Fractions"), activity(2, "Sets")]);

        assert_eq!(top[0].activity_id, 5);
        assert_eq!(top[0].title, "Fractions");
        assert_eq!(top[0].submissions_count, 2);
        assert_eq!(top[0].avg_score, 70.5);
        assert_eq!(top[1].activity_id, 2);
        assert_eq!(top[2].title, "Activity 9");
        assert_eq!(top[2].avg_score, 0.0);
    }

    #[test]
    fn test_build_overview_totals() {
        let evaluations = vec![
            evaluation(1, EvaluationStatus::Published),
            evaluation(2, EvaluationStatus::Draft),
        ];
        let submissions = vec![
            submission(1, 10, 1, Some(20), 0),
            submission(2, 10, 1, None, 5),
            submission(3, 11, 1, Some(100), 0),
        ];
        let overview = build_overview(&evaluations, &submissions, &[activity(1, "A")], 4, 50.0);

        assert_eq!(overview.total_students, 2);
        assert_eq!(overview.registered_students, 4);
        assert_eq!(overview.total_evaluations, 2);
        assert_eq!(overview.published_evaluations, 1);
        assert_eq!(overview.total_activities, 1);
        assert_eq!(overview.total_submissions, 3);
        assert_eq!(overview.submitted_count, 2);
        assert_eq!(overview.in_progress_count, 1);
        assert_eq!(overview.at_risk_students_count, 1);
        assert_eq!(overview.score_distribution[0].count, 1);
        assert_eq!(overview.score_distribution[4].count, 1);
    }

    #[test]
    fn test_empty_overview_keeps_buckets() {
        let overview = empty_overview();
        assert_eq!(overview.total_submissions, 0);
        assert_eq!(overview.score_distribution.len(), 5);
        assert!(overview.students_performance.is_empty());
    }
}
