use std::sync::Arc;

use crate::{
    api::graphql::{build_schema, CatalogSchema},
    infrastructure::{config::Config, store::CatalogStore},
    services::catalog::CatalogService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: CatalogSchema,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn CatalogStore>) -> Self {
        let schema = build_schema(CatalogService::new(store));
        Self { config, schema }
    }
}
