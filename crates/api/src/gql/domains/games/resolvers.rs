use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::games;

use super::types::Game;

#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let state = ctx.data::<AppState>()?;
        Ok(games::list(&state.db).into_iter().map(Game::from).collect())
    }

    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let state = ctx.data::<AppState>()?;
        let game_id = Uuid::parse_str(id.as_str()).gql_err("Invalid game ID")?;
        Ok(games::get_by_id(&state.db, game_id).map(Game::from))
    }
}

#[derive(Default)]
pub struct GameMutation;

#[Object]
impl GameMutation {
    /// Delete a game and return the games that remain. Reviews of the
    /// deleted game are left in place.
    async fn delete_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<Option<Vec<Option<Game>>>> {
        let state = ctx.data::<AppState>()?;

        let game_id = Uuid::parse_str(id.as_str()).gql_err("Invalid game ID")?;

        let remaining = games::delete(&state.db, game_id);

        Ok(Some(
            remaining
                .into_iter()
                .map(|row| Some(Game::from(row)))
                .collect(),
        ))
    }
}
