use uuid::Uuid;

use crate::db::Db;
use crate::models::ReviewRow;

pub fn list(db: &Db) -> Vec<ReviewRow> {
    db.read().reviews.clone()
}

pub fn get_by_id(db: &Db, id: Uuid) -> Option<ReviewRow> {
    db.read().reviews.iter().find(|r| r.id == id).cloned()
}

pub fn list_by_game(db: &Db, game_id: Uuid) -> Vec<ReviewRow> {
    db.read()
        .reviews
        .iter()
        .filter(|r| r.game_id == game_id)
        .cloned()
        .collect()
}

pub fn list_by_author(db: &Db, author_id: Uuid) -> Vec<ReviewRow> {
    db.read()
        .reviews
        .iter()
        .filter(|r| r.author_id == author_id)
        .cloned()
        .collect()
}

pub fn insert(db: &Db, row: ReviewRow) {
    db.write().reviews.push(row);
}
