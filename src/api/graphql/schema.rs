use async_graphql::{ComplexObject, Context, ErrorExtensions, Object, Result};

use crate::{
    domain::models::{Course, NewCourse, NewProfessor, Professor},
    services::catalog::CatalogService,
};

fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a CatalogService> {
    ctx.data::<CatalogService>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A Single Course
    async fn course(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Course>> {
        let Some(id) = id else {
            return Ok(None);
        };
        catalog(ctx)?.course(id).await.map_err(|err| err.extend())
    }

    /// List of all the courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        catalog(ctx)?.courses().await.map_err(|err| err.extend())
    }

    /// A Single Professor
    async fn professor(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Professor>> {
        let Some(id) = id else {
            return Ok(None);
        };
        catalog(ctx)?.professor(id).await.map_err(|err| err.extend())
    }

    /// All the Professors
    async fn professors(&self, ctx: &Context<'_>) -> Result<Vec<Professor>> {
        catalog(ctx)?.professors().await.map_err(|err| err.extend())
    }

    /// Courses for the professor
    async fn profile(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Vec<Course>> {
        let Some(name) = name else {
            return Ok(Vec::new());
        };
        catalog(ctx)?.profile(&name).await.map_err(|err| err.extend())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        professor_id: i32,
    ) -> Result<Course> {
        let course = NewCourse { name, professor_id };
        catalog(ctx)?
            .add_course(course)
            .await
            .map_err(|err| err.extend())
    }

    /// Add a professor
    async fn add_professor(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: Option<String>,
    ) -> Result<Professor> {
        let professor = NewProfessor {
            first_name,
            last_name,
        };
        catalog(ctx)?
            .add_professor(professor)
            .await
            .map_err(|err| err.extend())
    }
}

#[ComplexObject]
impl Course {
    async fn professor(&self, ctx: &Context<'_>) -> Result<Option<Professor>> {
        catalog(ctx)?
            .professor_of(self)
            .await
            .map_err(|err| err.extend())
    }
}

#[ComplexObject]
impl Professor {
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        catalog(ctx)?
            .courses_of(self)
            .await
            .map_err(|err| err.extend())
    }
}
