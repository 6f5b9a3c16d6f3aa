use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::FindOptions,
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Quiz>>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)>;
    async fn update(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete(&self, id: ObjectId) -> AppResult<()>;
    /// Store-level atomic increment; never read-modify-write, so concurrent
    /// submissions cannot lose updates.
    async fn increment_completions(&self, id: ObjectId) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        let result = self.collection.insert_one(&quiz).await?;
        quiz.id = result.inserted_id.as_object_id();
        Ok(quiz)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(quiz)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let total = self.collection.count_documents(doc! {}).await? as i64;

        let find_options = FindOptions::builder()
            .skip(Some(offset.max(0) as u64))
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;

        Ok((items, total))
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let id = quiz
            .id
            .ok_or_else(|| AppError::InternalError("Quiz is missing an id".to_string()))?;

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &quiz)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id.to_hex()
            )));
        }

        Ok(quiz)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id.to_hex()
            )));
        }

        Ok(())
    }

    async fn increment_completions(&self, id: ObjectId) -> AppResult<()> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "completions": 1 } })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id.to_hex()
            )));
        }

        Ok(())
    }
}
