pub mod fixtures {
    use mongodb::bson::oid::ObjectId;

    use crate::models::domain::{Question, Quiz, User};

    /// Creates a question with the given correct answers and matching options.
    pub fn question(text: &str, correct: &[&str]) -> Question {
        Question {
            text: text.to_string(),
            question_type: if correct.len() > 1 { "multiple" } else { "single" }.to_string(),
            options: correct.iter().map(|s| s.to_string()).collect(),
            correct_answers: correct.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn quiz(title: &str, created_by: ObjectId) -> Quiz {
        Quiz {
            id: Some(ObjectId::new()),
            title: title.to_string(),
            description: format!("{} description", title),
            questions: vec![question("Q1", &["A", "B"]), question("Q2", &["C"])],
            created_by,
            completions: 0,
        }
    }

    pub fn test_user(username: &str) -> User {
        User {
            id: Some(ObjectId::new()),
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}
