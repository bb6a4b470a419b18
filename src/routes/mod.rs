pub mod health;
pub mod men;
pub mod students;
