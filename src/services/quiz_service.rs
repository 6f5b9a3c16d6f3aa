use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz},
        dto::request::{CreateQuizRequest, UpdateQuizRequest},
    },
    repositories::QuizRepository,
    services::grading::{self, SubmissionReport},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(&self, user_id: &str, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        let created_by = parse_user_id(user_id)?;

        let questions: Vec<Question> = request.questions.into_iter().map(Question::from).collect();
        let quiz = Quiz::new(request.title, request.description, questions, created_by);

        self.repository.insert(quiz).await
    }

    /// Returns one page of quizzes plus the total page count.
    pub async fn list_quizzes(&self, page: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = (page - 1) * limit;

        let (quizzes, total) = self.repository.list(offset, limit).await?;
        let total_pages = (total + limit - 1) / limit;

        Ok((quizzes, total_pages))
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let oid = parse_quiz_id(id)?;
        self.repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| quiz_not_found(id))
    }

    pub async fn update_quiz(
        &self,
        user_id: &str,
        id: &str,
        request: UpdateQuizRequest,
    ) -> AppResult<Quiz> {
        request.validate()?;

        let mut quiz = self.get_quiz(id).await?;
        require_owner(&quiz, user_id)?;

        quiz.title = request.title;
        quiz.description = request.description;
        quiz.questions = request.questions.into_iter().map(Question::from).collect();

        self.repository.update(quiz).await
    }

    pub async fn delete_quiz(&self, user_id: &str, id: &str) -> AppResult<()> {
        let oid = parse_quiz_id(id)?;
        let quiz = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| quiz_not_found(id))?;
        require_owner(&quiz, user_id)?;

        self.repository.delete(oid).await
    }

    /// Grades a submission and bumps the quiz's completion counter. Requires
    /// no authentication; the counter is only touched once grading succeeded.
    pub async fn submit_quiz(
        &self,
        id: &str,
        answers: &[Vec<String>],
    ) -> AppResult<SubmissionReport> {
        let oid = parse_quiz_id(id)?;
        let quiz = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| quiz_not_found(id))?;

        let report = grading::grade_submission(&quiz.questions, answers);

        self.repository.increment_completions(oid).await?;

        Ok(report)
    }
}

/// Only a quiz's creator may mutate or delete it.
fn require_owner(quiz: &Quiz, user_id: &str) -> AppResult<()> {
    if quiz.created_by.to_hex() != user_id {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }
    Ok(())
}

fn parse_quiz_id(id: &str) -> AppResult<ObjectId> {
    // An id that is not a valid ObjectId cannot refer to any stored quiz.
    ObjectId::parse_str(id).map_err(|_| quiz_not_found(id))
}

fn quiz_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Quiz with id '{}' not found", id))
}

fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("Could not resolve the authenticated user".to_string()))
}
