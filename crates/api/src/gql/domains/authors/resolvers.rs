use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::authors;

use super::types::Author;

#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let state = ctx.data::<AppState>()?;
        Ok(authors::list(&state.db)
            .into_iter()
            .map(Author::from)
            .collect())
    }

    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let state = ctx.data::<AppState>()?;
        let author_id = Uuid::parse_str(id.as_str()).gql_err("Invalid author ID")?;
        Ok(authors::get_by_id(&state.db, author_id).map(Author::from))
    }
}
