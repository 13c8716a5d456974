use async_graphql::dataloader::Loader;
use infra::{db::Db, models::AuthorRow, models::GameRow};
use std::{collections::HashMap, convert::Infallible, future::Future};
use uuid::Uuid;

#[derive(Clone)]
pub struct GameLoader {
    db: Db,
}

impl GameLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<Uuid> for GameLoader {
    type Value = GameRow;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = infra::repos::games::list_by_ids(&db, &ids);

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// AuthorLoader - batch load authors by ID
#[derive(Clone)]
pub struct AuthorLoader {
    db: Db,
}

impl AuthorLoader {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl Loader<Uuid> for AuthorLoader {
    type Value = AuthorRow;
    type Error = Infallible;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let db = self.db.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = infra::repos::authors::list_by_ids(&db, &ids);

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}
