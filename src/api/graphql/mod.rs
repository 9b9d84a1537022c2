//! `/graphql` endpoint backed by async-graphql.
//!
//! POST executes any operation. GET executes queries from the query string,
//! refuses mutations, and serves GraphiQL when no query is given.

use std::sync::Arc;

use async_graphql::{
    http::{parse_query_string, GraphiQLSource},
    parser::{
        parse_query,
        types::{DocumentOperations, OperationType},
    },
    EmptySubscription, Request, Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Extension, RawQuery},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    infrastructure::state::AppState,
    services::{
        catalog::CatalogService,
        errors::{to_response, ServiceError},
    },
};

mod schema;

pub use schema::{MutationRoot, QueryRoot};

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn build_schema(catalog: CatalogService) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

pub fn router() -> Router {
    Router::new().route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
}

async fn graphql_post(
    Extension(state): Extension<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

async fn graphql_get(
    Extension(state): Extension<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let request = match parse_query_string(query.as_deref().unwrap_or_default()) {
        Ok(request) => request,
        Err(err) => return to_response(ServiceError::BadRequest(err.to_string())).into_response(),
    };

    // Other parameters alone (`variables`, `operationName`, ...) still count as no query.
    if request.query.trim().is_empty() {
        if state.config.app.graphiql {
            return graphiql().into_response();
        }
        return to_response(ServiceError::BadRequest("missing query".to_string())).into_response();
    }

    if is_mutation(&request) {
        debug!("rejecting mutation sent over GET");
        return to_response(ServiceError::MethodNotAllowed(
            "mutations can only be sent with POST".to_string(),
        ))
        .into_response();
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

// Unparseable documents fall through so the engine reports the syntax error.
fn is_mutation(request: &Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };

    match document.operations {
        DocumentOperations::Single(operation) => operation.node.ty == OperationType::Mutation,
        DocumentOperations::Multiple(operations) => match request.operation_name.as_deref() {
            Some(selected) => operations.iter().any(|(name, operation)| {
                name.as_str() == selected && operation.node.ty == OperationType::Mutation
            }),
            None => false,
        },
    }
}
