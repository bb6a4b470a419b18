use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::entities::student;

const LIKE_ESCAPE: char = '\\';

/// Optional criteria for a student lookup. Only the criteria that are present
/// constrain the result; all present criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilter {
    /// Case-insensitive substring of the student's name
    pub name: Option<String>,
    /// Exact age
    pub age: Option<i32>,
    /// Exact sex code
    pub sex: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predicate<'a> {
    NameContains(&'a str),
    AgeEquals(i32),
    SexEquals(i32),
}

impl Predicate<'_> {
    fn to_expr(self) -> SimpleExpr {
        match self {
            // Both sides go through the backend's LOWER so they fold alike.
            Predicate::NameContains(needle) => Expr::cust_with_exprs(
                format!("LOWER($1) LIKE LOWER($2) ESCAPE '{}'", LIKE_ESCAPE),
                [
                    Expr::col(student::Column::Name).into(),
                    Expr::val(format!("%{}%", escape_like(needle))).into(),
                ],
            ),
            Predicate::AgeEquals(age) => student::Column::Age.eq(age),
            Predicate::SexEquals(sex) => student::Column::Sex.eq(sex),
        }
    }

    #[cfg(test)]
    fn holds_for(self, record: &student::Model) -> bool {
        match self {
            Predicate::NameContains(needle) => record
                .name
                .as_deref()
                .is_some_and(|name| {
                    name.to_ascii_lowercase()
                        .contains(&needle.to_ascii_lowercase())
                }),
            Predicate::AgeEquals(age) => record.age == age,
            Predicate::SexEquals(sex) => record.sex == Some(sex),
        }
    }
}

impl StudentFilter {
    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::new();
        if let Some(name) = self.name.as_deref() {
            predicates.push(Predicate::NameContains(name));
        }
        if let Some(age) = self.age {
            predicates.push(Predicate::AgeEquals(age));
        }
        if let Some(sex) = self.sex {
            predicates.push(Predicate::SexEquals(sex));
        }
        predicates
    }

    /// SQL condition ANDing every present criterion. An empty filter yields
    /// an empty `Condition::all()`, which matches every row.
    pub fn condition(&self) -> Condition {
        self.predicates()
            .into_iter()
            .fold(Condition::all(), |condition, predicate| {
                condition.add(predicate.to_expr())
            })
    }

    /// Evaluates the same criteria as [`StudentFilter::condition`] against an
    /// already loaded record. Name folding is ASCII-only, like SQLite's `LOWER`.
    #[cfg(test)]
    pub fn matches(&self, record: &student::Model) -> bool {
        self.predicates()
            .into_iter()
            .all(|predicate| predicate.holds_for(record))
    }
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
