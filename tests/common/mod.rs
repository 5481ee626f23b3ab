//! In-process stand-in for the rental backend, with the same routes and
//! error bodies as the real service.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rental_manager::models::{
    Payment, PaymentStatus, Property, PropertyPayload, Snapshot, Tenant, TenantPayload,
    TogglePaymentRequest,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct StubDb {
    records: Arc<Mutex<Snapshot>>,
    next_id: Arc<AtomicI64>,
}

impl StubDb {
    fn allocate_id(&self) -> i64 {
        1000 + self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.records.lock().unwrap().clone()
    }

    pub fn add_tenant(&self, name: &str, contact: &str, unit_id: Option<i64>) -> i64 {
        let id = self.allocate_id();
        self.records.lock().unwrap().tenants.push(Tenant {
            id,
            name: name.to_string(),
            contact: contact.to_string(),
            unit_id,
        });
        id
    }

    pub fn add_property(&self, name: &str) -> i64 {
        let id = self.allocate_id();
        self.records.lock().unwrap().properties.push(Property {
            id,
            name: name.to_string(),
        });
        id
    }
}

fn router(db: StubDb) -> Router {
    Router::new()
        .route("/api/data", get(all_data))
        .route("/api/tenants", post(add_tenant))
        .route(
            "/api/tenants/:id",
            axum::routing::put(update_tenant).delete(delete_tenant),
        )
        .route("/api/properties", post(add_property))
        .route(
            "/api/properties/:id",
            axum::routing::delete(delete_property),
        )
        .route("/api/payments/toggle", post(toggle_payment))
        .with_state(db)
}

/// Serve the stub inside the caller's runtime. Good for tests that talk to
/// the backend directly.
pub async fn spawn_stub() -> (StubDb, String) {
    let db = StubDb::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().unwrap();
    let app = router(db.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serve");
    });
    (db, format!("http://{addr}/api"))
}

/// Serve the stub on a dedicated runtime thread so it outlives individual
/// `#[tokio::test]` runtimes. Used by the end-to-end tests that share one
/// app process.
pub fn spawn_stub_on_thread() -> (StubDb, String) {
    let db = StubDb::default();
    let server_db = db.clone();
    let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("stub runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub listener");
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, router(server_db)).await.expect("stub serve");
        });
    });
    let addr = rx.recv().expect("stub address");
    (db, format!("http://{addr}/api"))
}

async fn all_data(State(db): State<StubDb>) -> Json<Snapshot> {
    Json(db.snapshot())
}

async fn add_tenant(
    State(db): State<StubDb>,
    Json(payload): Json<TenantPayload>,
) -> (StatusCode, Json<Tenant>) {
    let tenant = Tenant {
        id: db.allocate_id(),
        name: payload.name,
        contact: payload.contact,
        unit_id: payload.unit_id,
    };
    db.records.lock().unwrap().tenants.push(tenant.clone());
    (StatusCode::CREATED, Json(tenant))
}

async fn update_tenant(
    Path(id): Path<i64>,
    State(db): State<StubDb>,
    Json(payload): Json<TenantPayload>,
) -> Response {
    let mut records = db.records.lock().unwrap();
    match records.tenants.iter_mut().find(|tenant| tenant.id == id) {
        Some(tenant) => {
            tenant.name = payload.name;
            tenant.contact = payload.contact;
            tenant.unit_id = payload.unit_id;
            Json(tenant.clone()).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Tenant not found" })),
        )
            .into_response(),
    }
}

async fn delete_tenant(Path(id): Path<i64>, State(db): State<StubDb>) -> Response {
    let mut records = db.records.lock().unwrap();
    let before = records.tenants.len();
    records.tenants.retain(|tenant| tenant.id != id);
    if records.tenants.len() < before {
        records.payments.retain(|payment| payment.tenant_id != id);
        Json(json!({ "message": "Tenant deleted successfully" })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Tenant not found" })),
        )
            .into_response()
    }
}

async fn add_property(
    State(db): State<StubDb>,
    Json(payload): Json<PropertyPayload>,
) -> (StatusCode, Json<Property>) {
    let property = Property {
        id: db.allocate_id(),
        name: payload.name,
    };
    db.records.lock().unwrap().properties.push(property.clone());
    (StatusCode::CREATED, Json(property))
}

async fn delete_property(Path(id): Path<i64>, State(db): State<StubDb>) -> Response {
    let mut records = db.records.lock().unwrap();
    let occupied = records
        .tenants
        .iter()
        .any(|tenant| tenant.unit_id == Some(id));
    if occupied {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Cannot delete property. It is currently occupied." })),
        )
            .into_response();
    }

    let before = records.properties.len();
    records.properties.retain(|property| property.id != id);
    if records.properties.len() < before {
        Json(json!({ "message": "Property deleted successfully" })).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Property not found" })),
        )
            .into_response()
    }
}

async fn toggle_payment(
    State(db): State<StubDb>,
    Json(request): Json<TogglePaymentRequest>,
) -> Json<serde_json::Value> {
    let mut records = db.records.lock().unwrap();
    let existing = records.payments.iter_mut().find(|payment| {
        payment.tenant_id == request.tenant_id
            && payment.month == request.month
            && payment.year == request.year
    });

    match existing {
        Some(payment) => {
            payment.status = match payment.status {
                PaymentStatus::Paid => PaymentStatus::Unpaid,
                PaymentStatus::Unpaid => PaymentStatus::Paid,
            };
        }
        None => {
            records.payments.push(Payment {
                tenant_id: request.tenant_id,
                month: request.month,
                year: request.year,
                status: PaymentStatus::Paid,
            });
        }
    }

    Json(json!({ "message": "Payment status updated successfully" }))
}
