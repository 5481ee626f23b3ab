use crate::errors::AppError;
use crate::models::{DashboardStats, PropertyPayload, RentStatusResponse, TenantPayload};
use crate::state::AppState;
use crate::stats::{dashboard_stats, monthly_status};
use crate::ui;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Datelike, Local};
use serde::Deserialize;
use tracing::info;

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.snapshot().await;
    Html(ui::render_dashboard(&dashboard_stats(&snapshot)))
}

pub async fn tenants(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.snapshot().await;
    Html(ui::render_tenants(&snapshot))
}

pub async fn properties(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.snapshot().await;
    Html(ui::render_properties(&snapshot))
}

pub async fn tenant_new(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.snapshot().await;
    Html(ui::render_tenant_form(&snapshot, None))
}

pub async fn tenant_edit(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let snapshot = state.snapshot().await;
    let tenant = snapshot
        .tenants
        .iter()
        .find(|tenant| tenant.id == id)
        .ok_or_else(|| AppError::not_found("Tenant not found"))?;
    Ok(Html(ui::render_tenant_form(&snapshot, Some(tenant))))
}

pub async fn rent(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let snapshot = state.snapshot().await;
    let tenant = snapshot
        .tenants
        .iter()
        .find(|tenant| tenant.id == id)
        .ok_or_else(|| AppError::not_found("Tenant not found"))?;
    let year = Local::now().year();
    let months = monthly_status(&snapshot, id, year);
    Ok(Html(ui::render_rent(tenant, &months)))
}

#[derive(Debug, Deserialize)]
pub struct TenantForm {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub unit_id: String,
}

/// Create-or-update dispatch on the hidden id field: empty means create.
pub async fn save_tenant(
    State(state): State<AppState>,
    Form(form): Form<TenantForm>,
) -> Result<Redirect, AppError> {
    let payload = TenantPayload {
        name: form.name.trim().to_string(),
        contact: form.contact.trim().to_string(),
        unit_id: form.unit_id.trim().parse().ok(),
    };

    match form.id.trim().parse::<i64>() {
        Ok(id) => {
            state.api.update_tenant(id, &payload).await?;
            info!("updated tenant {id}");
        }
        Err(_) => {
            let created = state.api.create_tenant(&payload).await?;
            info!("created tenant {}", created.id);
        }
    }

    state.reload().await?;
    Ok(Redirect::to("/tenants"))
}

pub async fn delete_tenant(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.api.delete_tenant(id).await?;
    info!("deleted tenant {id}");
    state.reload().await?;
    Ok(Redirect::to("/tenants"))
}

#[derive(Debug, Deserialize)]
pub struct PropertyForm {
    pub name: String,
}

pub async fn create_property(
    State(state): State<AppState>,
    Form(form): Form<PropertyForm>,
) -> Result<Redirect, AppError> {
    let payload = PropertyPayload {
        name: form.name.trim().to_string(),
    };
    let created = state.api.create_property(&payload).await?;
    info!("created property {}", created.id);
    state.reload().await?;
    Ok(Redirect::to("/properties"))
}

/// The backend rejects deleting an occupied property; its reason is carried
/// through [`AppError`] and shown to the user verbatim.
pub async fn delete_property(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.api.delete_property(id).await?;
    info!("deleted property {id}");
    state.reload().await?;
    Ok(Redirect::to("/properties"))
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub tenant_id: i64,
    pub month: u32,
    pub year: i32,
}

/// Toggle, reload, then land back on the rent page so the flip is visible
/// immediately.
pub async fn toggle_payment(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect, AppError> {
    state
        .api
        .toggle_payment(form.tenant_id, form.month, form.year)
        .await?;
    state.reload().await?;
    Ok(Redirect::to(&format!("/tenants/{}/rent", form.tenant_id)))
}

#[derive(Debug, Deserialize)]
pub struct ReloadForm {
    #[serde(default)]
    pub next: String,
}

pub async fn reload(
    State(state): State<AppState>,
    Form(form): Form<ReloadForm>,
) -> Result<Redirect, AppError> {
    state.reload().await?;
    let next = if form.next.starts_with('/') {
        form.next
    } else {
        "/".to_string()
    };
    Ok(Redirect::to(&next))
}

pub async fn api_dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    let snapshot = state.snapshot().await;
    Json(dashboard_stats(&snapshot))
}

pub async fn api_rent(
    Path(tenant_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RentStatusResponse>, AppError> {
    let snapshot = state.snapshot().await;
    if !snapshot.tenants.iter().any(|tenant| tenant.id == tenant_id) {
        return Err(AppError::not_found("Tenant not found"));
    }
    let year = Local::now().year();
    Ok(Json(RentStatusResponse {
        tenant_id,
        year,
        months: monthly_status(&snapshot, tenant_id, year),
    }))
}
