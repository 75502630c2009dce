use crate::errors::AppError;
use crate::models::{ChartView, ModeQuery, ModeRequest, ViewMode};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use tracing::warn;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
) -> Result<Html<String>, AppError> {
    let view = state.controller(query.mode).render(state.records)?;
    Ok(Html(render_index(&view)?))
}

/// View for `?mode=`, or the default mode when none is given.
pub async fn get_growth(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<ChartView>, AppError> {
    let view = state.controller(query.mode).render(state.records)?;
    Ok(Json(view))
}

/// Switches the calling page's mode. Other pages keep their own.
pub async fn select_mode(
    State(state): State<AppState>,
    Json(payload): Json<ModeRequest>,
) -> Result<Json<ChartView>, AppError> {
    let mode = payload.mode.parse::<ViewMode>().inspect_err(|err| {
        warn!("rejected mode switch: {err}");
    })?;

    let view = state.controller(Some(mode)).render(state.records)?;
    Ok(Json(view))
}

pub async fn select_daily() -> Redirect {
    redirect_to(ViewMode::Daily)
}

pub async fn select_weekly() -> Redirect {
    redirect_to(ViewMode::Weekly)
}

fn redirect_to(mode: ViewMode) -> Redirect {
    Redirect::to(&format!("/?mode={mode}"))
}
