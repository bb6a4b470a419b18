use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::student;
use crate::student::{NewStudent, Page};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    #[schema(example = "John")]
    pub name: Option<String>,
    #[schema(example = 20)]
    pub age: i32,
    #[schema(example = 1)]
    pub sex: Option<i32>,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            sex: model.sex,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentPageResponse {
    pub content: Vec<StudentResponse>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based index of this page
    pub page: u64,
    pub size: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
}

impl From<Page<student::Model>> for StudentPageResponse {
    fn from(page: Page<student::Model>) -> Self {
        let first = page.is_first();
        let last = page.is_last();
        let page = page.map(StudentResponse::from);

        Self {
            number_of_elements: page.content.len(),
            content: page.content,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            page: page.page,
            size: page.size,
            first,
            last,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    #[schema(example = "John")]
    pub name: Option<String>,

    /// Defaults to 0
    #[schema(example = 20)]
    pub age: Option<i32>,

    #[schema(example = 1)]
    pub sex: Option<i32>,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(request: CreateStudentRequest) -> Self {
        NewStudent {
            name: request.name,
            age: request.age.unwrap_or_default(),
            sex: request.sex,
        }
    }
}
