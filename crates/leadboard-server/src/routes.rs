use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;
use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use leadboard_core::time::now_utc;
use leadboard_core::{InteractionNew, Lead, LeadFilter, LeadId, LeadNew, LeadStatus, LeadUpdate};
use leadboard_csv::{export_filename, import_csv, to_csv, ImportReport, UTF8_BOM};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/leads", get(list_leads).post(create_lead))
        .route("/leads/export", get(export_leads))
        .route("/leads/import", post(import_leads))
        .route(
            "/leads/{id}",
            get(get_lead).put(update_lead).delete(delete_lead),
        )
        .route("/leads/{id}/interactions", post(add_interaction))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    debug!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

// An id that does not parse cannot name a stored lead.
fn parse_id(raw: &str) -> Result<LeadId, ApiError> {
    LeadId::from_str(raw).map_err(|_| ApiError::NotFound)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    status: Option<String>,
    q: Option<String>,
}

impl ListParams {
    fn into_filter(self) -> Result<LeadFilter, ApiError> {
        let mut filter = LeadFilter::new();
        if let Some(raw) = self.status.filter(|raw| !raw.trim().is_empty()) {
            let status = LeadStatus::from_str(&raw)
                .map_err(|err| ApiError::Invalid(err.to_string()))?;
            filter = filter.with_status(status);
        }
        if let Some(text) = self.q {
            filter = filter.with_query(&text);
        }
        Ok(filter)
    }
}

async fn list_leads(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<Lead>>, ApiError> {
    let filter = params.into_filter()?;
    let leads = state
        .run("Failed to fetch leads", move |store| store.search(&filter))
        .await?;
    Ok(Json(leads))
}

async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lead>, ApiError> {
    let id = parse_id(&id)?;
    state
        .run("Failed to fetch lead", move |store| store.get(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_lead(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LeadNew>,
) -> Result<(StatusCode, Json<Lead>), ApiError> {
    let lead = state
        .run("Failed to create lead", move |store| {
            store.create(now_utc(), input)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

async fn update_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<LeadUpdate>,
) -> Result<Json<Lead>, ApiError> {
    let id = parse_id(&id)?;
    state
        .run("Failed to update lead", move |store| store.update(id, update))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let removed = state
        .run("Failed to delete lead", move |store| store.delete(id))
        .await?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}

async fn add_interaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<InteractionNew>,
) -> Result<(StatusCode, Json<Lead>), ApiError> {
    let id = parse_id(&id)?;
    let lead = state
        .run("Failed to add interaction", move |store| {
            store.add_interaction(now_utc(), id, input)
        })
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok((StatusCode::CREATED, Json(lead)))
}

async fn export_leads(State(state): State<AppState>) -> Result<Response, ApiError> {
    let leads = state
        .run("Failed to export leads", |store| store.list())
        .await?;
    let mut body = String::from(UTF8_BOM);
    body.push_str(&to_csv(&leads));
    let disposition = format!("attachment; filename=\"{}\"", export_filename(now_utc()));
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, body).into_response())
}

async fn import_leads(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportReport>, ApiError> {
    let report = state
        .run("Failed to import leads", move |store| {
            Ok(import_csv(store, now_utc(), &body))
        })
        .await?;
    Ok(Json(report))
}
