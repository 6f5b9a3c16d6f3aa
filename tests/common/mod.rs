use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizdeck_server::{
    app_state::AppState,
    auth::JwtService,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::{QuizRepository, UserRepository},
    services::{QuizService, UserService},
};

pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            // Mirrors the unique index on users.username
            return Err(AppError::DatabaseError(format!(
                "duplicate key: {}",
                user.username
            )));
        }
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}

/// Quizzes kept in insertion order, so paginated listing is deterministic.
pub struct InMemoryQuizRepository {
    quizzes: RwLock<Vec<Quiz>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quiz.id.is_none() {
            quiz.id = Some(ObjectId::new());
        }
        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == Some(id)).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let quizzes = self.quizzes.read().await;
        let total = quizzes.len() as i64;

        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(quizzes.len());
        let page = if start >= quizzes.len() {
            vec![]
        } else {
            quizzes[start..end].to_vec()
        };

        Ok((page, total))
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        let slot = quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or_else(|| AppError::NotFound("quiz not found".to_string()))?;
        *slot = quiz.clone();
        Ok(quiz)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let before = quizzes.len();
        quizzes.retain(|q| q.id != Some(id));
        if quizzes.len() == before {
            return Err(AppError::NotFound("quiz not found".to_string()));
        }
        Ok(())
    }

    async fn increment_completions(&self, id: ObjectId) -> AppResult<()> {
        // Single write-lock acquisition, so concurrent submissions can't
        // interleave a read-modify-write.
        let mut quizzes = self.quizzes.write().await;
        let quiz = quizzes
            .iter_mut()
            .find(|q| q.id == Some(id))
            .ok_or_else(|| AppError::NotFound("quiz not found".to_string()))?;
        quiz.completions += 1;
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "quizdeck-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8000,
        jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
        jwt_expiration_hours: 1,
        cors_allowed_origin: "http://localhost:5173".to_string(),
    }
}

/// Fully wired application state backed by in-memory stores.
pub fn test_state() -> AppState {
    let config = test_config();

    AppState {
        user_service: Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
        quiz_service: Arc::new(QuizService::new(Arc::new(InMemoryQuizRepository::new()))),
        jwt_service: Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        )),
        config: Arc::new(config),
    }
}

pub mod test_data {
    use quizdeck_server::models::dto::request::{
        CreateQuizRequest, LoginRequest, RegisterRequest, UpdateQuizRequest,
    };

    #[allow(dead_code)]
    pub fn register_request(username: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_quiz_request(title: &str) -> CreateQuizRequest {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "description": "A sample quiz",
            "questions": [
                { "text": "Q1", "type": "multiple", "options": ["A", "B", "C"], "correctAnswers": ["A", "B"] },
                { "text": "Q2", "type": "single", "options": ["C", "D"], "correctAnswers": "C" },
                { "text": "Q3", "type": "single", "options": ["D", "E"], "correctAnswers": ["D"] },
            ],
        }))
        .expect("sample quiz request should deserialize")
    }

    #[allow(dead_code)]
    pub fn sample_update_request(title: &str) -> UpdateQuizRequest {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "description": "An updated quiz",
            "questions": [
                { "text": "Q1", "type": "single", "options": ["X", "Y"], "correctAnswers": ["X"] },
            ],
        }))
        .expect("sample update request should deserialize")
    }
}
