use uuid::Uuid;

use crate::db::Db;
use crate::models::GameRow;

pub fn list(db: &Db) -> Vec<GameRow> {
    db.read().games.clone()
}

pub fn get_by_id(db: &Db, id: Uuid) -> Option<GameRow> {
    db.read().games.iter().find(|g| g.id == id).cloned()
}

pub fn list_by_ids(db: &Db, ids: &[Uuid]) -> Vec<GameRow> {
    db.read()
        .games
        .iter()
        .filter(|g| ids.contains(&g.id))
        .cloned()
        .collect()
}

pub fn insert(db: &Db, row: GameRow) {
    db.write().games.push(row);
}

/// Remove the game with `id` (if any) and return the games left behind.
/// Reviews referencing the game are not touched.
pub fn delete(db: &Db, id: Uuid) -> Vec<GameRow> {
    let mut tables = db.write();
    tables.games.retain(|g| g.id != id);
    tables.games.clone()
}
