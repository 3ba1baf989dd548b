use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use han_pinyin::{first_reading, Readings, Transliterate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;

/// Wire envelope. `code` is always 0; there is no failing path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { code: 0, data }
    }
}

/// Raw `key=value` pairs, in request order.
type Params = Option<Query<Vec<(String, String)>>>;

/// First `han` value, `""` when missing or when the query can't be decoded.
fn han_param(params: Params) -> String {
    params
        .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "han"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}

fn convert<T: Transliterate>(state: &AppState<T>, han: &str) -> Readings {
    let readings = state.engine.convert(han, &state.config);
    debug!(
        chars = han.chars().count(),
        converted = readings.len(),
        style = %state.config.style,
        "converted"
    );
    readings
}

pub async fn full_conversion<T>(
    State(state): State<Arc<AppState<T>>>,
    params: Params,
) -> Json<ApiResponse<Readings>>
where
    T: Transliterate + 'static,
{
    let han = han_param(params);
    Json(ApiResponse::ok(convert(&state, &han)))
}

pub async fn first_syllable<T>(
    State(state): State<Arc<AppState<T>>>,
    params: Params,
) -> Json<ApiResponse<String>>
where
    T: Transliterate + 'static,
{
    let han = han_param(params);
    let readings = convert(&state, &han);
    Json(ApiResponse::ok(first_reading(&readings)))
}
