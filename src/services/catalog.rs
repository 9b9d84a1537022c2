//! Resolver logic for the professor/course catalog.
//!
//! Relationship fields are plain linear scans over the store's listings and
//! are recomputed on every call.

use std::sync::Arc;

use tracing::info;

use crate::{
    domain::models::{Course, NewCourse, NewProfessor, Professor},
    infrastructure::store::CatalogStore,
};

use super::errors::ServiceError;

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn course(&self, id: i32) -> Result<Option<Course>, ServiceError> {
        Ok(self.store.get_course(id).await?)
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ServiceError> {
        Ok(self.store.list_courses().await?)
    }

    pub async fn professor(&self, id: i32) -> Result<Option<Professor>, ServiceError> {
        Ok(self.store.get_professor(id).await?)
    }

    pub async fn professors(&self) -> Result<Vec<Professor>, ServiceError> {
        Ok(self.store.list_professors().await?)
    }

    /// Courses taught by the first professor whose first name equals `name`.
    ///
    /// Matching is exact and case-sensitive. An unknown name yields an empty
    /// list rather than an error.
    pub async fn profile(&self, name: &str) -> Result<Vec<Course>, ServiceError> {
        let professor = self
            .store
            .list_professors()
            .await?
            .into_iter()
            .find(|p| p.first_name == name);

        match professor {
            Some(professor) => self.courses_of(&professor).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn add_course(&self, course: NewCourse) -> Result<Course, ServiceError> {
        let course = self.store.append_course(course).await?;
        info!(
            course_id = course.id,
            professor_id = course.professor_id,
            "course added"
        );
        Ok(course)
    }

    pub async fn add_professor(&self, professor: NewProfessor) -> Result<Professor, ServiceError> {
        let professor = self.store.append_professor(professor).await?;
        info!(professor_id = professor.id, "professor added");
        Ok(professor)
    }

    /// `None` when the course's professor id is dangling.
    pub async fn professor_of(&self, course: &Course) -> Result<Option<Professor>, ServiceError> {
        Ok(self
            .store
            .list_professors()
            .await?
            .into_iter()
            .find(|p| p.id == course.professor_id))
    }

    pub async fn courses_of(&self, professor: &Professor) -> Result<Vec<Course>, ServiceError> {
        Ok(self
            .store
            .list_courses()
            .await?
            .into_iter()
            .filter(|c| c.is_taught_by(professor))
            .collect())
    }
}
