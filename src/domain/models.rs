use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Represents the Professor of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Professor {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Represents a course by a professor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Course {
    pub id: i32,
    pub name: String,
    /// Not checked against existing professors.
    pub professor_id: i32,
}

/// Fields supplied by `addProfessor`; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfessor {
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Fields supplied by `addCourse`; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub professor_id: i32,
}

impl NewProfessor {
    pub fn into_professor(self, id: i32) -> Professor {
        Professor {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl NewCourse {
    pub fn into_course(self, id: i32) -> Course {
        Course {
            id,
            name: self.name,
            professor_id: self.professor_id,
        }
    }
}

impl Course {
    pub fn is_taught_by(&self, professor: &Professor) -> bool {
        self.professor_id == professor.id
    }
}
