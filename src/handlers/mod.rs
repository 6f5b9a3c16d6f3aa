pub mod auth_handler;
pub mod quiz_handler;

use actix_web::{get, web, HttpResponse};

use crate::auth::AuthMiddleware;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Registers all routes. Public routes come first; everything inside the
/// trailing scope passes through the auth gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(auth_handler::register)
        .service(auth_handler::login)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::submit_quiz)
        .service(quiz_handler::get_quiz)
        .service(
            web::scope("")
                .wrap(AuthMiddleware)
                .service(auth_handler::protected)
                .service(quiz_handler::create_quiz)
                .service(quiz_handler::update_quiz)
                .service(quiz_handler::delete_quiz),
        );
}
