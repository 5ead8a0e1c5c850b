use async_graphql::{EmptySubscription, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, extract::State, http::HeaderMap, response::Html};

use crate::modules::consultations::adapters::inbound::graphql::CallerResolution;
pub use crate::modules::consultations::adapters::inbound::graphql::{MutationRoot, QueryRoot};
use crate::modules::directory::use_cases::resolve_caller::handler::{CALLER_HEADER, resolve_caller};
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let credential = headers
        .get(CALLER_HEADER)
        .and_then(|value| value.to_str().ok());
    let resolution = resolve_caller(&*state.directory, credential).await;
    let request = request.into_inner().data(CallerResolution(resolution));
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
