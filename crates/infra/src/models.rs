use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRow {
    pub id: Uuid,
    pub title: String,
    pub platform: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRow {
    pub id: Uuid,
    pub rating: i32,
    pub content: String,
    pub game_id: Uuid,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRow {
    pub id: Uuid,
    pub name: String,
    pub verified: bool,
}
