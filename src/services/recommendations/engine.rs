//! 规则 + 打分的活动推荐

use std::collections::HashSet;

use crate::models::activities::entities::Activity;
use crate::models::evaluations::entities::PrerequisiteLevel;
use crate::models::recommendations::responses::RecommendationItem;

pub const STRATEGY: &str = "rule+scoring";

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 按平均分确定目标阶段
pub fn target_level(avg: f64) -> PrerequisiteLevel {
    if avg < 40.0 {
        PrerequisiteLevel::Beginner
    } else if avg < 70.0 {
        PrerequisiteLevel::Intermediate
    } else {
        PrerequisiteLevel::Advanced
    }
}

/// 识别自由文本的等级写法，难度词映射到对应阶段
pub fn parse_level(text: &str) -> Option<PrerequisiteLevel> {
    let upper = text.trim().to_ascii_uppercase();
    if upper.starts_with("BEGIN") || upper == "EASY" {
        Some(PrerequisiteLevel::Beginner)
    } else if upper.starts_with("INTER") || upper == "MEDIUM" {
        Some(PrerequisiteLevel::Intermediate)
    } else if upper.starts_with("ADV") || upper == "HARD" {
        Some(PrerequisiteLevel::Advanced)
    } else {
        None
    }
}

pub fn priority(level: PrerequisiteLevel, target: PrerequisiteLevel, avg: f64, activity_id: i64) -> f64 {
    let mut score = if level == target { 70.0 } else { 30.0 };

    match level {
        PrerequisiteLevel::Beginner if avg < 40.0 => score += 15.0,
        PrerequisiteLevel::Intermediate if (40.0..70.0).contains(&avg) => score += 10.0,
        PrerequisiteLevel::Advanced if avg >= 70.0 => score += 15.0,
        _ => {}
    }

    // 同分时的稳定加成
    score += activity_id.rem_euclid(10) as f64;
    round2(score)
}

/// activities 需按 id 升序；已作答过的活动被排除
pub fn recommend(
    activities: &[Activity],
    attempted: &HashSet<i64>,
    avg: f64,
    limit: usize,
) -> Vec<RecommendationItem> {
    let target = target_level(avg);

    let mut items: Vec<RecommendationItem> = activities
        .iter()
        .filter(|activity| !attempted.contains(&activity.id))
        .map(|activity| {
            let level = parse_level(activity.level.as_str()).unwrap_or(target);
            let title = if activity.title.trim().is_empty() {
                format!("Activity {}", activity.id)
            } else {
                activity.title.clone()
            };

            RecommendationItem {
                activity_id: activity.id,
                title,
                skill_id: Some(activity.competence_id),
                level,
                priority_score: priority(level, target, avg, activity.id),
                reason: format!("Suited to level {target} (avg={avg:.1})."),
            }
        })
        .collect();

    // 稳定排序，同分保持原有顺序
    items.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activities::entities::{ActivityType, Difficulty};

    fn activity(id: i64, level: Difficulty) -> Activity {
        Activity {
            id,
            competence_id: 7,
            title: format!("Activity title {id}"),
            description: None,
            activity_type: ActivityType::Exercice,
            duration: 30,
            level,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_target_level_thresholds() {
        assert_eq!(target_level(0.0), PrerequisiteLevel::Beginner);
        assert_eq!(target_level(39.99), PrerequisiteLevel::Beginner);
        assert_eq!(target_level(40.0), PrerequisiteLevel::Intermediate);
        assert_eq!(target_level(69.9), PrerequisiteLevel::Intermediate);
        assert_eq!(target_level(70.0), PrerequisiteLevel::Advanced);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("beginner"), Some(PrerequisiteLevel::Beginner));
        assert_eq!(parse_level("BEGINNERS"), Some(PrerequisiteLevel::Beginner));
        assert_eq!(parse_level(" Intermédiaire"), Some(PrerequisiteLevel::Intermediate));
        assert_eq!(parse_level("intermediate"), Some(PrerequisiteLevel::Intermediate));
        assert_eq!(parse_level("medium"), Some(PrerequisiteLevel::Intermediate));
        assert_eq!(parse_level("Advanced"), Some(PrerequisiteLevel::Advanced));
        assert_eq!(parse_level("hard"), Some(PrerequisiteLevel::Advanced));
        assert_eq!(parse_level("expert"), None);
    }

    #[test]
    fn test_priority() {
        use PrerequisiteLevel::*;
        // 命中目标 70 + 初学加成 15 + 3
        assert_eq!(priority(Beginner, Beginner, 20.0, 13), 88.0);
        // 未命中目标 30 + 0
        assert_eq!(priority(Advanced, Beginner, 20.0, 10), 30.0);
        assert_eq!(priority(Intermediate, Intermediate, 55.0, 1), 81.0);
        assert_eq!(priority(Advanced, Advanced, 90.0, -3), 92.0);
    }

    #[test]
    fn test_recommend_orders_excludes_and_limits() {
        let activities = vec![
            activity(1, Difficulty::Hard),
            activity(2, Difficulty::Easy),
            activity(3, Difficulty::Medium),
            activity(4, Difficulty::Easy),
            activity(12, Difficulty::Easy),
        ];
        let attempted: HashSet<i64> = [4].into_iter().collect();

        let items = recommend(&activities, &attempted, 0.0, 3);
        let ids: Vec<i64> = items.iter().map(|i| i.activity_id).collect();
        // 2: 87, 12: 87, 3: 33, 1: 31
        assert_eq!(ids, vec![2, 12, 3]);
        assert_eq!(items[0].level, PrerequisiteLevel::Beginner);
        assert_eq!(items[0].skill_id, Some(7));
        assert_eq!(items[0].reason, "Suited to level beginner (avg=0.0).");
    }

    #[test]
    fn test_recommend_title_fallback() {
        let mut untitled = activity(5, Difficulty::Medium);
        untitled.title = "  ".into();
        let items = recommend(&[untitled], &HashSet::new(), 55.5, 6);
        assert_eq!(items[0].title, "Activity 5");
        assert_eq!(items[0].reason, "Suited to level intermediate (avg=55.5).");
    }
}
