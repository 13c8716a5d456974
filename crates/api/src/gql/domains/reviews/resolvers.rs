use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::reviews;

use super::types::Review;

#[derive(Default)]
pub struct ReviewQuery;

#[Object]
impl ReviewQuery {
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<AppState>()?;
        Ok(reviews::list(&state.db)
            .into_iter()
            .map(Review::from)
            .collect())
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let state = ctx.data::<AppState>()?;
        let review_id = Uuid::parse_str(id.as_str()).gql_err("Invalid review ID")?;
        Ok(reviews::get_by_id(&state.db, review_id).map(Review::from))
    }
}
