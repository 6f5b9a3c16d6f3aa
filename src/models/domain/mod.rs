pub mod quiz;
pub mod user;

pub use quiz::{Question, Quiz};
pub use user::User;
