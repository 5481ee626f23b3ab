use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/tenants", get(handlers::tenants))
        .route("/tenants/new", get(handlers::tenant_new))
        .route("/tenants/save", post(handlers::save_tenant))
        .route("/tenants/:id/edit", get(handlers::tenant_edit))
        .route("/tenants/:id/delete", post(handlers::delete_tenant))
        .route("/tenants/:id/rent", get(handlers::rent))
        .route("/properties", get(handlers::properties).post(handlers::create_property))
        .route("/properties/:id/delete", post(handlers::delete_property))
        .route("/payments/toggle", post(handlers::toggle_payment))
        .route("/reload", post(handlers::reload))
        .route("/api/dashboard", get(handlers::api_dashboard))
        .route("/api/rent/:tenant_id", get(handlers::api_rent))
        .with_state(state)
}
