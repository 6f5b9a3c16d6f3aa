use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::UserRepository,
};

// Same message for unknown username and wrong password, so a caller cannot
// probe which usernames exist.
const BAD_CREDENTIALS: &str = "Invalid username or password";

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(format!(
                "Username '{}' is already taken",
                request.username
            )));
        }

        let password_hash = password::hash_password(&request.password)?;
        let user = User::new(&request.username, &password_hash);

        self.repository.create(user).await
    }

    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<User> {
        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

        if !password::verify_password(&request.password, &user.password_hash) {
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}
