use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Registered account. Created once at registration and never mutated or
/// deleted afterwards. The password is stored as a bcrypt hash only.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> Self {
        User {
            id: None,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        }
    }

    /// Hex form of the Mongo id, used as the token subject.
    pub fn id_hex(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }
}
