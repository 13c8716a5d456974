use api::AppState;
use async_graphql::{EmptySubscription, Request, Variables};
use infra::db::Db;
use infra::models::{AuthorRow, GameRow, ReviewRow};
use infra::repos::{authors, games, reviews};
use uuid::Uuid;

/// Fresh AppState over an empty in-memory store.
pub fn setup_state() -> AppState {
    AppState::new(Db::new())
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &async_graphql::Schema<api::gql::QueryRoot, api::gql::MutationRoot, EmptySubscription>,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Create a test game and return its ID
#[allow(dead_code)]
pub fn create_test_game(state: &AppState, title: &str, platform: &[&str]) -> Uuid {
    let game_id = Uuid::new_v4();

    games::insert(
        &state.db,
        GameRow {
            id: game_id,
            title: title.to_string(),
            platform: platform.iter().map(|p| p.to_string()).collect(),
        },
    );

    game_id
}

/// Create a test author and return its ID
#[allow(dead_code)]
pub fn create_test_author(state: &AppState, name: &str, verified: bool) -> Uuid {
    let author_id = Uuid::new_v4();

    authors::insert(
        &state.db,
        AuthorRow {
            id: author_id,
            name: name.to_string(),
            verified,
        },
    );

    author_id
}

/// Create a test review and return its ID
#[allow(dead_code)]
pub fn create_test_review(
    state: &AppState,
    game_id: Uuid,
    author_id: Uuid,
    rating: i32,
    content: &str,
) -> Uuid {
    let review_id = Uuid::new_v4();

    reviews::insert(
        &state.db,
        ReviewRow {
            id: review_id,
            rating,
            content: content.to_string(),
            game_id,
            author_id,
        },
    );

    review_id
}
