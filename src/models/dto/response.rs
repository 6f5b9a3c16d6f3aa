use serde::Serialize;

use crate::models::domain::{Question, Quiz};
use crate::services::grading::GradedAnswer;

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Quiz as rendered to clients: ObjectIds become hex strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub created_by: String,
    pub completions: i64,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: quiz.title,
            description: quiz.description,
            questions: quiz.questions,
            created_by: quiz.created_by.to_hex(),
            completions: quiz.completions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizDto>,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizMessageResponse {
    pub message: String,
    pub quiz: QuizDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub message: String,
    pub correct_answers: Vec<GradedAnswer>,
    pub correct_count: usize,
    pub total_questions: usize,
    pub time_spent: Option<i64>,
}
