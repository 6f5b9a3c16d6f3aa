use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Quiz document as stored in the `quizzes` collection. Field names are
/// camelCase on the wire and in storage (`createdBy`, `correctAnswers`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub created_by: ObjectId,
    #[serde(default)]
    pub completions: i64,
}

/// Question embedded in a quiz; no independent lifecycle.
/// `correct_answers` is order-insensitive and normalized to a list on write.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
}

impl Quiz {
    pub fn new(
        title: String,
        description: String,
        questions: Vec<Question>,
        created_by: ObjectId,
    ) -> Self {
        Quiz {
            id: None,
            title,
            description,
            questions,
            created_by,
            completions: 0,
        }
    }
}
