use uuid::uuid;

use crate::db::Db;
use crate::models::{AuthorRow, GameRow, ReviewRow};
use crate::repos::{authors, games, reviews};

/// Load the built-in catalog into the store. This stands in for a
/// database migration: the server has data to serve as soon as it is up.
pub fn populate(db: &Db) {
    let game_rows = vec![
        GameRow {
            id: uuid!("5d87f6a4-51c0-4ad7-9896-12c4bd85a376"),
            title: "Starfall Odyssey".to_string(),
            platform: vec!["Switch".to_string(), "PC".to_string()],
        },
        GameRow {
            id: uuid!("1f1ea937-43c8-4c50-a186-dcefe07c06d2"),
            title: "Ember Tactics".to_string(),
            platform: vec!["PS5".to_string(), "Xbox".to_string(), "PC".to_string()],
        },
        GameRow {
            id: uuid!("7b2d9f0c-9a81-4f4e-8f06-553c25175a0d"),
            title: "Hollow Depths".to_string(),
            platform: vec!["PC".to_string()],
        },
        GameRow {
            id: uuid!("c0a6fb0c-6d2b-46ce-9c41-21a710d22ba8"),
            title: "Kart Frenzy".to_string(),
            platform: vec!["Switch".to_string()],
        },
        GameRow {
            id: uuid!("e3c2a8d5-4b53-4ce3-b8f8-4dba51f26e90"),
            title: "Chrono Drift".to_string(),
            platform: vec!["PS5".to_string(), "PC".to_string()],
        },
    ];

    let author_rows = vec![
        AuthorRow {
            id: uuid!("42d5c20b-bd04-4a55-9d04-0ae77f3b4d61"),
            name: "mika".to_string(),
            verified: true,
        },
        AuthorRow {
            id: uuid!("8c7c63ac-4f25-4b1f-b182-3e9e4f0c2a41"),
            name: "sol".to_string(),
            verified: false,
        },
        AuthorRow {
            id: uuid!("f0b5a2ef-77e8-4877-a2fc-0d0e9a52e97a"),
            name: "petra".to_string(),
            verified: true,
        },
    ];

    let review_rows = vec![
        ReviewRow {
            id: uuid!("a2f1d3c4-81b6-4a2e-9b73-0f2a6d1c5e01"),
            rating: 9,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[1].id,
            author_id: author_rows[0].id,
        },
        ReviewRow {
            id: uuid!("b3e2c4d5-92c7-4b3f-8c84-1a3b7e2d6f02"),
            rating: 10,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[0].id,
            author_id: author_rows[1].id,
        },
        ReviewRow {
            id: uuid!("c4f3d5e6-a3d8-4c40-9d95-2b4c8f3e7a03"),
            rating: 7,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[2].id,
            author_id: author_rows[2].id,
        },
        ReviewRow {
            id: uuid!("d5a4e6f7-b4e9-4d51-8ea6-3c5d9a4f8b04"),
            rating: 5,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[3].id,
            author_id: author_rows[1].id,
        },
        ReviewRow {
            id: uuid!("e6b5f7a8-c5fa-4e62-9fb7-4d6e0b5a9c05"),
            rating: 8,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[4].id,
            author_id: author_rows[0].id,
        },
        ReviewRow {
            id: uuid!("f7c6a8b9-d60b-4f73-8ac8-5e7f1c6b0d06"),
            rating: 7,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[1].id,
            author_id: author_rows[0].id,
        },
        ReviewRow {
            id: uuid!("08d7b9ca-e71c-4084-9bd9-6f802d7c1e07"),
            rating: 10,
            content: "lorem ipsum".to_string(),
            game_id: game_rows[0].id,
            author_id: author_rows[2].id,
        },
    ];

    for row in game_rows {
        games::insert(db, row);
    }
    for row in author_rows {
        authors::insert(db, row);
    }
    for row in review_rows {
        reviews::insert(db, row);
    }

    tracing::info!(
        games = games::list(db).len(),
        authors = authors::list(db).len(),
        reviews = reviews::list(db).len(),
        "Seeded in-memory store"
    );
}
