use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Question;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// An answer value as clients send it: either a bare string or a list of
/// strings. Single-choice clients historically sent the bare form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerInput {
    Many(Vec<String>),
    One(String),
}

impl AnswerInput {
    pub fn into_values(self) -> Vec<String> {
        match self {
            AnswerInput::Many(values) => values,
            AnswerInput::One(value) => vec![value],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    #[validate(length(min = 1))]
    pub text: String,

    #[serde(rename = "type")]
    pub question_type: String,

    #[serde(default)]
    pub options: Vec<String>,

    pub correct_answers: AnswerInput,
}

impl From<QuestionInput> for Question {
    fn from(input: QuestionInput) -> Self {
        Question {
            text: input.text,
            question_type: input.question_type,
            options: input.options,
            correct_answers: input.correct_answers.into_values(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(nested)]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(nested)]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: Vec<AnswerInput>,

    #[serde(default)]
    pub time_spent: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 1))]
    pub page: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(5),
        }
    }
}

impl PaginationParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(5).clamp(1, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_register_request() {
        let request = RegisterRequest {
            username: "johndoe".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            username: "johndoe".to_string(),
            password: "no".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_scalar_correct_answer_becomes_singleton_list() {
        let json = serde_json::json!({
            "text": "Capital of France?",
            "type": "single",
            "options": ["Paris", "Lyon"],
            "correctAnswers": "Paris",
        });

        let input: QuestionInput = serde_json::from_value(json).expect("should deserialize");
        let question: Question = input.into();
        assert_eq!(question.correct_answers, vec!["Paris".to_string()]);
    }

    #[test]
    fn test_answer_list_is_preserved() {
        let json = serde_json::json!({
            "text": "Pick two",
            "type": "multiple",
            "correctAnswers": ["A", "B"],
        });

        let input: QuestionInput = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(
            input.correct_answers.into_values(),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_submit_request_defaults() {
        let request: SubmitQuizRequest =
            serde_json::from_value(serde_json::json!({})).expect("should deserialize");
        assert!(request.answers.is_empty());
        assert!(request.time_spent.is_none());
    }

    #[test]
    fn test_submit_request_mixed_answer_shapes() {
        let json = serde_json::json!({
            "answers": ["Paris", ["A", "B"]],
            "timeSpent": 42,
        });

        let request: SubmitQuizRequest = serde_json::from_value(json).expect("should deserialize");
        let values: Vec<Vec<String>> = request
            .answers
            .into_iter()
            .map(AnswerInput::into_values)
            .collect();
        assert_eq!(values, vec![vec!["Paris".to_string()], vec!["A".to_string(), "B".to_string()]]);
        assert_eq!(request.time_spent, Some(42));
    }

    #[test]
    fn test_pagination_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 5);
    }

    #[test]
    fn test_pagination_clamps_out_of_range_values() {
        let params = PaginationParams {
            page: Some(0),
            limit: Some(500),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);
    }

    #[test]
    fn test_quiz_request_rejects_empty_title() {
        let request = CreateQuizRequest {
            title: "".to_string(),
            description: "desc".to_string(),
            questions: vec![],
        };
        assert!(request.validate().is_err());
    }
}
