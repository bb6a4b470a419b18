use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::Query;
use http::request::Parts;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::ServiceError;
use crate::student::{PageRequest, PageSettings};

/// Raw pagination query parameters, before defaults and limits are applied.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index
    pub page: Option<u64>,
    /// Number of records per page
    pub size: Option<u64>,
    /// Repeatable ordering, `property[,asc|desc]`. Properties: id, name, age, sex
    #[serde(default)]
    pub sort: Vec<String>,
}

impl<S> FromRequestParts<S> for PageRequest
where
    PageSettings: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ServiceError::bad_request(e.to_string()))?;

        PageSettings::from_ref(state).resolve(params.page, params.size, &params.sort)
    }
}
