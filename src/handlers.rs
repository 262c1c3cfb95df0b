use crate::models::{AddHabitRequest, DashboardView, HabitId, StatsSummary};
use crate::state::AppState;
use crate::stats::build_stats_at;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&dashboard.view(state.quote), ""))
}

pub async fn add_habit_form(
    State(state): State<AppState>,
    Form(payload): Form<AddHabitRequest>,
) -> Response {
    let mut dashboard = state.dashboard.lock().await;
    match dashboard.add_habit(&payload.name).await {
        Some(_) => Redirect::to("/").into_response(),
        None => Html(render_index(&dashboard.view(state.quote), &payload.name)).into_response(),
    }
}

pub async fn toggle_habit_form(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state
        .dashboard
        .lock()
        .await
        .toggle_habit_today(&HabitId::from(id))
        .await;
    Redirect::to("/")
}

pub async fn delete_habit_form(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.dashboard.lock().await.delete_habit(&HabitId::from(id)).await;
    Redirect::to("/")
}

pub async fn get_habits(State(state): State<AppState>) -> Json<DashboardView> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view(state.quote))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsSummary> {
    let dashboard = state.dashboard.lock().await;
    Json(build_stats_at(dashboard.today(), dashboard.habits()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.add_habit(&payload.name).await;
    Json(dashboard.view(state.quote))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.toggle_habit_today(&HabitId::from(id)).await;
    Json(dashboard.view(state.quote))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.delete_habit(&HabitId::from(id)).await;
    Json(dashboard.view(state.quote))
}
