use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::{MessageResponse, TokenResponse},
    },
};

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    log::info!("Registered new user '{}'", user.username);

    Ok(HttpResponse::Created().json(MessageResponse::new("User created")))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.authenticate(&request).await?;
    let token = state.jwt_service.create_token(&user)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

#[get("/protected")]
pub async fn protected(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "You have access, {}",
        auth.0.username
    ))))
}
