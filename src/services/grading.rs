use serde::Serialize;

use crate::models::domain::Question;

/// Outcome of grading one question, as echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedAnswer {
    pub question: String,
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub answers: Vec<GradedAnswer>,
    pub correct_count: usize,
    pub total_questions: usize,
}

/// Order-insensitive answer comparison: both sides are sorted and joined
/// before the equality check, so ["A","B"] and ["B","A"] grade the same.
pub fn answers_match(expected: &[String], submitted: &[String]) -> bool {
    canonical_form(expected) == canonical_form(submitted)
}

fn canonical_form(values: &[String]) -> String {
    let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

/// Grades a submission against a quiz's question list. Answers are matched
/// to questions by position; a submission shorter than the question list
/// leaves the tail unanswered, which never matches.
pub fn grade_submission(questions: &[Question], answers: &[Vec<String>]) -> SubmissionReport {
    let mut graded = Vec::with_capacity(questions.len());
    let mut correct_count = 0;

    for (index, question) in questions.iter().enumerate() {
        let correct = answers
            .get(index)
            .map_or(false, |submitted| {
                answers_match(&question.correct_answers, submitted)
            });
        if correct {
            correct_count += 1;
        }

        graded.push(GradedAnswer {
            question: question.text.clone(),
            correct,
            correct_answer: question.correct_answers.join(", "),
        });
    }

    SubmissionReport {
        answers: graded,
        correct_count,
        total_questions: questions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::question;

    fn to_vecs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_order_independent_match() {
        assert!(answers_match(&to_vecs(&["A", "B"]), &to_vecs(&["B", "A"])));
    }

    #[test]
    fn test_subset_does_not_match() {
        assert!(!answers_match(&to_vecs(&["A", "B"]), &to_vecs(&["A"])));
    }

    #[test]
    fn test_superset_does_not_match() {
        assert!(!answers_match(&to_vecs(&["A"]), &to_vecs(&["A", "B"])));
    }

    #[test]
    fn test_empty_sides_match() {
        assert!(answers_match(&[], &[]));
    }

    #[test]
    fn test_grade_counts_correct_answers() {
        let questions = vec![
            question("Q1", &["A", "B"]),
            question("Q2", &["C"]),
            question("Q3", &["D"]),
        ];
        let answers = vec![
            to_vecs(&["B", "A"]), // correct, order-independent
            to_vecs(&["C"]),      // correct
            to_vecs(&["X"]),      // wrong
        ];

        let report = grade_submission(&questions, &answers);
        assert_eq!(report.correct_count, 2);
        assert_eq!(report.total_questions, 3);
        assert!(report.answers[0].correct);
        assert!(report.answers[1].correct);
        assert!(!report.answers[2].correct);
    }

    #[test]
    fn test_missing_answers_never_match() {
        let questions = vec![question("Q1", &["A"]), question("Q2", &["B"])];
        let answers = vec![to_vecs(&["A"])];

        let report = grade_submission(&questions, &answers);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total_questions, 2);
        assert!(!report.answers[1].correct);
    }

    #[test]
    fn test_correct_answer_display_is_comma_joined() {
        let questions = vec![question("Q1", &["A", "B"])];
        let report = grade_submission(&questions, &[]);
        assert_eq!(report.answers[0].correct_answer, "A, B");
        assert_eq!(report.answers[0].question, "Q1");
    }

    #[test]
    fn test_graded_answer_wire_format() {
        let graded = GradedAnswer {
            question: "Q1".to_string(),
            correct: true,
            correct_answer: "A".to_string(),
        };
        let json = serde_json::to_value(&graded).expect("should serialize");
        assert_eq!(json["correctAnswer"], "A");
        assert_eq!(json["correct"], true);
    }
}
