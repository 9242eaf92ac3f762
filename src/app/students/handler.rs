//! 学生 HTTP 处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use super::{
    model::{Student, StudentInput},
    service::StudentService,
};
use crate::core::{
    error::CoreError,
    response::{Deleted, Health},
};

#[derive(Clone)]
pub struct AppState {
    pub student_service: StudentService,
}

/// `/api/students` 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, CoreError> {
    let students = state.student_service.list_students().await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, CoreError> {
    let student = state.student_service.get_student(&id).await?;
    Ok(Json(student))
}

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), CoreError> {
    let Json(input) = payload?;
    let student = state.student_service.create_student(input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<Student>, CoreError> {
    let Json(input) = payload?;
    let student = state.student_service.update_student(&id, input).await?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted<Student>>, CoreError> {
    let student = state.student_service.delete_student(&id).await?;
    Ok(Json(Deleted::new("Student deleted successfully", student)))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Health>, CoreError> {
    state.student_service.ping().await?;
    Ok(Json(Health::healthy(state.student_service.backend())))
}
