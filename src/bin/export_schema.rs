//! Prints the GraphQL schema in SDL form, or writes it to the path given as
//! the first argument.

use std::sync::Arc;

use course_catalog::{
    api::graphql::build_schema, infrastructure::store::MemoryStore,
    services::catalog::CatalogService,
};

fn main() -> anyhow::Result<()> {
    let schema = build_schema(CatalogService::new(Arc::new(MemoryStore::default()))).sdl();

    if let Some(target) = std::env::args().nth(1) {
        std::fs::write(target, schema)?;
    } else {
        println!("{schema}");
    }

    Ok(())
}
