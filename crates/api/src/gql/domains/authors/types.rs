use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::domains::reviews::types::Review;
use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub verified: bool,
}

impl From<infra::models::AuthorRow> for Author {
    fn from(row: infra::models::AuthorRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            verified: row.verified,
        }
    }
}

#[ComplexObject]
impl Author {
    /// Reviews written by this author.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Review>>> {
        let state = ctx.data::<AppState>()?;

        let author_id = uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid author ID")?;

        let rows = infra::repos::reviews::list_by_author(&state.db, author_id);

        Ok(Some(rows.into_iter().map(Review::from).collect()))
    }
}
