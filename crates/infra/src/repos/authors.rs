use uuid::Uuid;

use crate::db::Db;
use crate::models::AuthorRow;

pub fn list(db: &Db) -> Vec<AuthorRow> {
    db.read().authors.clone()
}

pub fn get_by_id(db: &Db, id: Uuid) -> Option<AuthorRow> {
    db.read().authors.iter().find(|a| a.id == id).cloned()
}

pub fn list_by_ids(db: &Db, ids: &[Uuid]) -> Vec<AuthorRow> {
    db.read()
        .authors
        .iter()
        .filter(|a| ids.contains(&a.id))
        .cloned()
        .collect()
}

pub fn insert(db: &Db, row: AuthorRow) {
    db.write().authors.push(row);
}
