use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::Query;

use super::dto::{CreateStudentRequest, StudentPageResponse, StudentResponse};
use crate::errors::ServiceError;
use crate::extractor::PageParams;
use crate::state::AppState;
use crate::student::{PageRequest, StudentFilter, StudentService};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/students", get(get_students).post(create_student))
        .route("/students/{student_id}", get(get_student))
}

/// Query students by optional name, age and sex, one page at a time
#[utoipa::path(
    get,
    path = "/students",
    params(StudentFilter, PageParams),
    responses(
        (status = 200, description = "Students retrieved", body = StudentPageResponse),
        (status = 400, description = "Malformed filter or pagination parameter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_students(
    State(students): State<StudentService>,
    Query(filter): Query<StudentFilter>,
    page: PageRequest,
) -> Result<(StatusCode, Json<StudentPageResponse>), ServiceError> {
    let page = students.find_students(&filter, &page).await?;

    Ok((StatusCode::OK, Json(page.into())))
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/students/{student_id}",
    params(
        ("student_id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student retrieved", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(students): State<StudentService>,
    Path(student_id): Path<i64>,
) -> Result<(StatusCode, Json<StudentResponse>), ServiceError> {
    let student = students
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("Student {}", student_id)))?;

    Ok((StatusCode::OK, Json(student.into())))
}

/// Create a new student
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(students): State<StudentService>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ServiceError> {
    let student = students.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}
