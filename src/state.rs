use sea_orm::DatabaseConnection;

use crate::student::{PageSettings, StudentService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub students: StudentService,
    pub paging: PageSettings,
}

impl AppState {
    pub fn new(db: DatabaseConnection, paging: PageSettings) -> Self {
        let students = StudentService::new(db.clone());
        Self {
            db,
            students,
            paging,
        }
    }
}

// Implement FromRef to allow extracting individual parts of the state
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for StudentService {
    fn from_ref(state: &AppState) -> Self {
        state.students.clone()
    }
}

impl axum::extract::FromRef<AppState> for PageSettings {
    fn from_ref(state: &AppState) -> Self {
        state.paging
    }
}
