//! Quiz checks.
//!
//! A quiz needs a question and at least two options, each with text.
//! Single-answer quizzes have exactly one correct option; multiple-answer
//! quizzes have at least one.

use wdoc_model::{Quiz, QuizType, is_blank};

use crate::issue::Issue;

pub fn check(quiz: &Quiz) -> Vec<Issue> {
    let mut issues = Vec::new();

    if is_blank(quiz.question.as_deref()) {
        issues.push(Issue::QuizMissingQuestion);
    }

    if quiz.options.len() < 2 {
        issues.push(Issue::QuizTooFewOptions {
            count: quiz.options.len(),
        });
    }

    let correct = quiz.correct_count();
    let correct_ok = match quiz.quiz_type {
        QuizType::Single => correct == 1,
        QuizType::Multiple => correct >= 1,
    };
    if !quiz.options.is_empty() && !correct_ok {
        issues.push(Issue::QuizCorrectCount {
            quiz_type: quiz.quiz_type,
            correct,
        });
    }

    for (index, option) in quiz.options.iter().enumerate() {
        let option_number = index + 1;
        if is_blank(option.text.as_deref()) {
            issues.push(Issue::QuizOptionMissingText {
                option: option_number,
            });
        }
        if is_blank(option.feedback.as_deref()) {
            issues.push(Issue::QuizOptionMissingFeedback {
                option: option_number,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use wdoc_model::QuizOption;

    use super::*;

    fn option(text: &str, correct: bool) -> QuizOption {
        QuizOption {
            text: Some(text.to_string()),
            correct,
            feedback: Some("Because.".to_string()),
        }
    }

    #[test]
    fn well_formed_quiz_passes() {
        let quiz = Quiz {
            question: Some("Which log enables point-in-time recovery?".to_string()),
            quiz_type: QuizType::Single,
            options: vec![option("Binary log", true), option("Slow query log", false)],
        };
        assert!(check(&quiz).is_empty());
    }

    #[test]
    fn single_answer_needs_exactly_one_correct() {
        let quiz = Quiz {
            question: Some("Q".to_string()),
            quiz_type: QuizType::Single,
            options: vec![option("A", true), option("B", true)],
        };
        assert_eq!(
            check(&quiz),
            vec![Issue::QuizCorrectCount {
                quiz_type: QuizType::Single,
                correct: 2
            }]
        );
    }

    #[test]
    fn multiple_answer_allows_several() {
        let quiz = Quiz {
            question: Some("Q".to_string()),
            quiz_type: QuizType::Multiple,
            options: vec![option("A", true), option("B", true), option("C", false)],
        };
        assert!(check(&quiz).is_empty());
    }

    #[test]
    fn empty_quiz_reports_question_and_options_once() {
        let issues = check(&Quiz::default());
        assert_eq!(
            issues,
            vec![
                Issue::QuizMissingQuestion,
                Issue::QuizTooFewOptions { count: 0 }
            ]
        );
    }

    #[test]
    fn blank_option_fields_are_flagged() {
        let quiz = Quiz {
            question: Some("Q".to_string()),
            quiz_type: QuizType::Single,
            options: vec![
                option("A", true),
                QuizOption {
                    text: Some("  ".to_string()),
                    correct: false,
                    feedback: None,
                },
            ],
        };
        assert_eq!(
            check(&quiz),
            vec![
                Issue::QuizOptionMissingText { option: 2 },
                Issue::QuizOptionMissingFeedback { option: 2 }
            ]
        );
    }
}
