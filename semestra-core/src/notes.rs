//! Notes catalog: the semester → course → class hierarchy.
//!
//! Lookup-only. Course content and editing rules live elsewhere; the
//! calendar side needs just enough structure to resolve reference tokens
//! into courses and classes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course code, e.g. "cs2040".
    pub id: String,
    pub semester_id: i64,
    pub name: String,
    pub updated_at: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
    pub updated_at: String,
}

/// The full notes hierarchy as loaded from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Catalog {
    pub fn active_semester(&self) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.is_active)
    }

    pub fn semester_by_id(&self, id: i64) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.semesters
            .iter()
            .flat_map(|s| s.courses.iter())
            .find(|c| c.id == id)
    }

    pub fn class_by_id(&self, id: &str) -> Option<&Class> {
        self.semesters
            .iter()
            .flat_map(|s| s.courses.iter())
            .flat_map(|c| c.classes.iter())
            .find(|class| class.id == id)
    }

    pub fn courses_for_semester(&self, semester_id: i64) -> &[Course] {
        self.semester_by_id(semester_id)
            .map(|s| s.courses.as_slice())
            .unwrap_or(&[])
    }

    pub fn classes_for_course(&self, course_id: &str) -> &[Class] {
        self.course_by_id(course_id)
            .map(|c| c.classes.as_slice())
            .unwrap_or(&[])
    }
}
