use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::domains::reviews::types::Review;
use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Game {
    pub id: ID,
    pub title: String,
    pub platform: Vec<String>,
}

impl From<infra::models::GameRow> for Game {
    fn from(row: infra::models::GameRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            platform: row.platform,
        }
    }
}

#[ComplexObject]
impl Game {
    /// Reviews written for this game.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Review>>> {
        let state = ctx.data::<AppState>()?;

        let game_id = uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid game ID")?;

        let rows = infra::repos::reviews::list_by_game(&state.db, game_id);

        Ok(Some(rows.into_iter().map(Review::from).collect()))
    }
}
