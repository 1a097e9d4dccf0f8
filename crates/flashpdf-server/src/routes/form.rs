use axum::extract::State;
use axum::response::Html;

use crate::error::ApiError;
use crate::page::render_index;
use crate::state::AppState;

pub async fn upload_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(render_index(&state.pages, None)?))
}
