//! 判分与题目校验

use std::collections::HashMap;

use crate::models::evaluations::{entities::Question, requests::CreateQuestionRequest};
use crate::models::submissions::{entities::GradedAnswer, requests::AnswerItem};

/// 百分制得分，四舍五入
pub fn percent(correct: i64, total: i64) -> i32 {
    if total <= 0 {
        return 0;
    }
    (correct as f64 * 100.0 / total as f64).round() as i32
}

/// 按题目顺序逐题判分
///
/// 未知题目的答案被忽略，同一题只取第一个答案，未作答按空答案记错。
pub fn grade(questions: &[Question], answers: &[AnswerItem]) -> (Vec<GradedAnswer>, i32) {
    let mut chosen: HashMap<i64, String> = HashMap::new();
    for item in answers {
        if !questions.iter().any(|q| q.id == item.question_id) {
            continue;
        }
        chosen.entry(item.question_id).or_insert_with(|| {
            item.chosen_answer
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        });
    }

    let graded: Vec<GradedAnswer> = questions
        .iter()
        .map(|question| {
            let chosen_answer = chosen.remove(&question.id).unwrap_or_default();
            let correct = !chosen_answer.is_empty() && chosen_answer == question.correct_answer;
            GradedAnswer {
                question_id: question.id,
                chosen_answer,
                correct,
            }
        })
        .collect();

    let correct = graded.iter().filter(|a| a.correct).count() as i64;
    let score = percent(correct, questions.len() as i64);
    (graded, score)
}

/// 整理后的题目
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuestion {
    pub label: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// 去掉空白选项，要求至少两个选项且正确答案在其中
pub fn normalize_question(req: CreateQuestionRequest) -> Result<NormalizedQuestion, &'static str> {
    let label = req.label.trim().to_string();
    if label.is_empty() {
        return Err("Question label is required");
    }

    let options: Vec<String> = req
        .options
        .into_iter()
        .flatten()
        .map(|option| option.trim().to_string())
        .filter(|option| !option.is_empty())
        .collect();
    if options.len() < 2 {
        return Err("A question needs at least two non-empty options");
    }

    let correct_answer = req.correct_answer.trim().to_string();
    if !options.contains(&correct_answer) {
        return Err("The correct answer must be one of the options");
    }

    Ok(NormalizedQuestion {
        label,
        options,
        correct_answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct: &str) -> Question {
        Question {
            id,
            evaluation_id: 1,
            label: format!("Q{id}"),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer: correct.into(),
            position: id as i32,
        }
    }

    fn answer(question_id: i64, chosen: Option<&str>) -> AnswerItem {
        AnswerItem {
            question_id,
            chosen_answer: chosen.map(str::to_string),
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(3, -1), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(4, 4), 100);
    }

    #[test]
    fn test_grade_counts_unanswered_as_wrong() {
        let questions = vec![question(1, "A"), question(2, "B"), question(3, "C")];
        let (graded, score) = grade(&questions, &[answer(1, Some(" A ")), answer(3, None)]);

        assert_eq!(score, 33);
        assert_eq!(graded.len(), 3);
        assert_eq!(graded[0].chosen_answer, "A");
        assert!(graded[0].correct);
        assert_eq!(graded[1].chosen_answer, "");
        assert!(!graded[1].correct);
        assert!(!graded[2].correct);
    }

    #[test]
    fn test_grade_first_answer_wins_and_unknown_ignored() {
        let questions = vec![question(1, "A"), question(2, "B")];
        let (graded, score) = grade(
            &questions,
            &[
                answer(99, Some("A")),
                answer(2, Some("C")),
                answer(2, Some("B")),
                answer(1, Some("a")),
            ],
        );

        assert_eq!(graded.len(), 2);
        assert_eq!(graded[1].chosen_answer, "C");
        // 大小写敏感
        assert!(!graded[0].correct);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_grade_without_questions() {
        let (graded, score) = grade(&[], &[answer(1, Some("A"))]);
        assert!(graded.is_empty());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_normalize_question() {
        let normalized = normalize_question(CreateQuestionRequest {
            label: "  2 + 2 ? ".into(),
            options: vec![Some(" 3".into()), None, Some("  ".into()), Some("4 ".into())],
            correct_answer: " 4".into(),
        })
        .unwrap();

        assert_eq!(normalized.label, "2 + 2 ?");
        assert_eq!(normalized.options, vec!["3", "4"]);
        assert_eq!(normalized.correct_answer, "4");
    }

    #[test]
    fn test_normalize_question_rejections() {
        let too_few = CreateQuestionRequest {
            label: "Q".into(),
            options: vec![Some("A".into()), Some(" ".into())],
            correct_answer: "A".into(),
        };
        assert!(normalize_question(too_few).is_err());

        let wrong_answer = CreateQuestionRequest {
            label: "Q".into(),
            options: vec![Some("A".into()), Some("B".into())],
            correct_answer: "C".into(),
        };
        assert_eq!(
            normalize_question(wrong_answer),
            Err("The correct answer must be one of the options")
        );

        let blank_label = CreateQuestionRequest {
            label: "   ".into(),
            options: vec![Some("A".into()), Some("B".into())],
            correct_answer: "A".into(),
        };
        assert!(normalize_question(blank_label).is_err());
    }
}
