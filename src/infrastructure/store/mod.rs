use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::{
    domain::models::{Course, NewCourse, NewProfessor, Professor},
    infrastructure::config::StoreConfig,
};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get_professor(&self, id: i32) -> anyhow::Result<Option<Professor>>;
    async fn list_professors(&self) -> anyhow::Result<Vec<Professor>>;
    async fn append_professor(&self, professor: NewProfessor) -> anyhow::Result<Professor>;

    async fn get_course(&self, id: i32) -> anyhow::Result<Option<Course>>;
    async fn list_courses(&self) -> anyhow::Result<Vec<Course>>;
    async fn append_course(&self, course: NewCourse) -> anyhow::Result<Course>;
}

pub fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn CatalogStore>> {
    match config.provider.as_str() {
        "memory" if config.seed => Ok(Arc::new(MemoryStore::seeded())),
        "memory" => Ok(Arc::new(MemoryStore::default())),
        other => anyhow::bail!("unsupported store provider: {other}"),
    }
}

pub fn seed_professors() -> Vec<Professor> {
    vec![
        Professor {
            id: 1,
            first_name: "Honey".to_string(),
            last_name: Some("Singh".to_string()),
        },
        Professor {
            id: 2,
            first_name: "Yo".to_string(),
            last_name: Some("Yo".to_string()),
        },
    ]
}

pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            name: "Amplifiya".to_string(),
            professor_id: 2,
        },
        Course {
            id: 2,
            name: "Woofer".to_string(),
            professor_id: 1,
        },
    ]
}

#[derive(Default)]
struct Collections {
    professors: Vec<Professor>,
    courses: Vec<Course>,
}

/// Process-local store; contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        Self {
            collections: RwLock::new(Collections {
                professors: seed_professors(),
                courses: seed_courses(),
            }),
        }
    }
}

// Ids are `len + 1`; correct only while the collections never shrink.
fn next_id(len: usize) -> anyhow::Result<i32> {
    i32::try_from(len + 1).map_err(|_| anyhow::anyhow!("id space exhausted at {len} records"))
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get_professor(&self, id: i32) -> anyhow::Result<Option<Professor>> {
        debug!(id, "looking up professor");
        let collections = self.collections.read();
        Ok(collections.professors.iter().find(|p| p.id == id).cloned())
    }

    async fn list_professors(&self) -> anyhow::Result<Vec<Professor>> {
        Ok(self.collections.read().professors.clone())
    }

    async fn append_professor(&self, professor: NewProfessor) -> anyhow::Result<Professor> {
        let mut collections = self.collections.write();
        let record = professor.into_professor(next_id(collections.professors.len())?);
        collections.professors.push(record.clone());
        Ok(record)
    }

    async fn get_course(&self, id: i32) -> anyhow::Result<Option<Course>> {
        debug!(id, "looking up course");
        let collections = self.collections.read();
        Ok(collections.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn list_courses(&self) -> anyhow::Result<Vec<Course>> {
        Ok(self.collections.read().courses.clone())
    }

    async fn append_course(&self, course: NewCourse) -> anyhow::Result<Course> {
        let mut collections = self.collections.write();
        let record = course.into_course(next_id(collections.courses.len())?);
        collections.courses.push(record.clone());
        Ok(record)
    }
}
