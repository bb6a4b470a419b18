use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MenQuery {
    /// Defaults to 160
    #[serde(default = "default_height")]
    pub height: i32,

    /// Defaults to 1
    #[serde(default = "default_code")]
    pub gender: i32,

    /// Defaults to 1
    #[serde(default = "default_code")]
    pub skin_type: i32,
}

fn default_height() -> i32 {
    160
}

fn default_code() -> i32 {
    1
}
