use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::entities::student;
use crate::student::NewStudent;

pub const SEED_STUDENTS: [(&str, i32); 3] = [("John", 20), ("Jane", 22), ("Doe", 25)];

/// Insert the demo students that are not present yet, keyed by name and age.
/// Returns how many rows were inserted.
pub async fn seed_students(db: &DatabaseConnection) -> Result<usize> {
    let mut inserted = 0;

    for (name, age) in SEED_STUDENTS {
        let existing = student::Entity::find()
            .filter(student::Column::Name.eq(name))
            .filter(student::Column::Age.eq(age))
            .one(db)
            .await
            .with_context(|| format!("Failed to check existing student {}", name))?;

        if existing.is_some() {
            tracing::debug!("Student {} ({}) already exists, skipping", name, age);
            continue;
        }

        NewStudent::named(name, age)
            .into_active_model()
            .insert(db)
            .await
            .with_context(|| format!("Failed to insert student {}", name))?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!("Seeded {} student(s)", inserted);
    } else {
        tracing::info!("Seed students already present, skipping initialization");
    }

    Ok(inserted)
}
