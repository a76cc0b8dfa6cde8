//! Notes catalog endpoints (read-only lookups)

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use semestra_core::SemestraError;
use semestra_core::notes::{Class, Course, Semester};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/semesters", get(list_semesters))
        .route("/semesters/{id}/courses", get(list_courses))
        .route("/courses/{id}/classes", get(list_classes))
        .route("/classes/{id}", get(get_class))
}

/// GET /semesters - The full semester list
async fn list_semesters(State(state): State<AppState>) -> Result<Json<Vec<Semester>>, AppError> {
    let catalog = state.semestra()?.notes_store().load()?;
    Ok(Json(catalog.semesters))
}

/// GET /semesters/:id/courses - Courses in a semester
async fn list_courses(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Course>>, AppError> {
    let catalog = state.semestra()?.notes_store().load()?;

    let semester = catalog
        .semester_by_id(id)
        .ok_or(SemestraError::SemesterNotFound(id))?;

    Ok(Json(semester.courses.clone()))
}

/// GET /courses/:id/classes - Classes in a course
async fn list_classes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Class>>, AppError> {
    let catalog = state.semestra()?.notes_store().load()?;

    let course = catalog
        .course_by_id(&id)
        .ok_or_else(|| SemestraError::CourseNotFound(id.clone()))?;

    Ok(Json(course.classes.clone()))
}

/// GET /classes/:id - A single class by id
async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Class>, AppError> {
    let catalog = state.semestra()?.notes_store().load()?;

    let class = catalog
        .class_by_id(&id)
        .ok_or_else(|| SemestraError::ClassNotFound(id.clone()))?;

    Ok(Json(class.clone()))
}
