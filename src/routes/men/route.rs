use axum::{Router, routing::get};
use axum_extra::extract::Query;

use super::dto::MenQuery;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/men", get(describe_man))
}

/// Echo the given parameters back as text
#[utoipa::path(
    get,
    path = "/men",
    params(MenQuery),
    responses(
        (status = 200, description = "Parameters echoed", body = String),
        (status = 400, description = "Malformed parameter")
    ),
    tag = "Men"
)]
pub async fn describe_man(Query(query): Query<MenQuery>) -> String {
    format!(
        "OK, height={}, gender={}, skinType={}",
        query.height, query.gender, query.skin_type
    )
}
