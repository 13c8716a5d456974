use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::domains::authors::types::Author;
use crate::gql::domains::games::types::Game;
use crate::gql::error::ResultExt;
use crate::gql::loaders::{AuthorLoader, GameLoader};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Review {
    pub id: ID,
    pub rating: i32,
    pub content: String,
    // Foreign keys stay internal; the schema exposes the resolved
    // `game` and `author` objects instead.
    #[graphql(skip)]
    pub game_id: ID,
    #[graphql(skip)]
    pub author_id: ID,
}

impl From<infra::models::ReviewRow> for Review {
    fn from(row: infra::models::ReviewRow) -> Self {
        Self {
            id: row.id.into(),
            rating: row.rating,
            content: row.content,
            game_id: row.game_id.into(),
            author_id: row.author_id.into(),
        }
    }
}

#[ComplexObject]
impl Review {
    async fn game(&self, ctx: &Context<'_>) -> Result<Game> {
        let loader = ctx.data::<DataLoader<GameLoader>>()?;
        let game_uuid = uuid::Uuid::parse_str(self.game_id.as_str()).gql_err("Invalid game ID")?;

        match loader
            .load_one(game_uuid)
            .await
            .gql_err("Loading game failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Game not found")),
        }
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        let loader = ctx.data::<DataLoader<AuthorLoader>>()?;
        let author_uuid =
            uuid::Uuid::parse_str(self.author_id.as_str()).gql_err("Invalid author ID")?;

        match loader
            .load_one(author_uuid)
            .await
            .gql_err("Loading author failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Author not found")),
        }
    }
}
