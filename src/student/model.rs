use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};

use crate::entities::student;

/// A student that has not been saved yet.
///
/// Start from [`NewStudent::default`] and assign fields, or use one of the
/// positional constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub name: Option<String>,
    pub age: i32,
    pub sex: Option<i32>,
}

impl NewStudent {
    pub fn new(sex: i32, age: i32, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age,
            sex: Some(sex),
        }
    }

    pub fn named(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: Some(name.into()),
            age,
            sex: None,
        }
    }
}

impl IntoActiveModel<student::ActiveModel> for NewStudent {
    fn into_active_model(self) -> student::ActiveModel {
        student::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            age: Set(self.age),
            sex: Set(self.sex),
        }
    }
}
