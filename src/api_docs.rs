use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::route::health_check,
        crate::routes::students::route::get_students,
        crate::routes::students::route::get_student,
        crate::routes::students::route::create_student,
        crate::routes::men::route::describe_man,
    ),
    components(
        schemas(
            crate::routes::students::dto::StudentResponse,
            crate::routes::students::dto::StudentPageResponse,
            crate::routes::students::dto::CreateStudentRequest,
        ),
    ),
    tags(
        (name = "Students", description = "Student query endpoints"),
        (name = "Men", description = "Parameter echo endpoint"),
        (name = "health", description = "Health check endpoints")
    ),
)]
pub struct ApiDoc;
