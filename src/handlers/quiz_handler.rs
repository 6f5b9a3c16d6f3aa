use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{
            AnswerInput, CreateQuizRequest, PaginationParams, SubmitQuizRequest, UpdateQuizRequest,
        },
        response::{
            MessageResponse, QuizDto, QuizListResponse, QuizMessageResponse, SubmitQuizResponse,
        },
    },
};

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(&auth.0.sub, request.into_inner())
        .await?;
    log::info!("User '{}' created quiz '{}'", auth.0.username, quiz.title);

    Ok(HttpResponse::Created().json(QuizMessageResponse {
        message: "Quiz created".to_string(),
        quiz: quiz.into(),
    }))
}

#[get("/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let (quizzes, total_pages) = state
        .quiz_service
        .list_quizzes(params.page(), params.limit())
        .await?;

    Ok(HttpResponse::Ok().json(QuizListResponse {
        quizzes: quizzes.into_iter().map(QuizDto::from).collect(),
        total_pages,
    }))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizDto::from(quiz)))
}

#[put("/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&auth.0.sub, &id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(QuizMessageResponse {
        message: "Quiz updated".to_string(),
        quiz: quiz.into(),
    }))
}

#[delete("/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&auth.0.sub, &id).await?;
    log::info!("User '{}' deleted quiz {}", auth.0.username, id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("Quiz deleted")))
}

// Open to anonymous callers; completing a quiz does not require an account.
#[post("/quizzes/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let SubmitQuizRequest { answers, time_spent } = request.into_inner();
    let answers: Vec<Vec<String>> = answers.into_iter().map(AnswerInput::into_values).collect();

    let report = state.quiz_service.submit_quiz(&id, &answers).await?;

    Ok(HttpResponse::Ok().json(SubmitQuizResponse {
        message: "Quiz completed!".to_string(),
        correct_answers: report.answers,
        correct_count: report.correct_count,
        total_questions: report.total_questions,
        time_spent,
    }))
}
