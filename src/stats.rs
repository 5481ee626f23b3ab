use crate::models::{DashboardStats, MonthStatus, Occupancy, PaymentStatus, Property, Snapshot};
use chrono::{Datelike, Local, NaiveDate};

/// Placeholder rendered for a missing or dangling unit reference.
pub const MISSING_UNIT: &str = "N/A";

pub fn dashboard_stats(snapshot: &Snapshot) -> DashboardStats {
    dashboard_stats_at(Local::now().date_naive(), snapshot)
}

pub fn dashboard_stats_at(today: NaiveDate, snapshot: &Snapshot) -> DashboardStats {
    let total_tenants = snapshot.tenants.len();
    // Each tenant is assumed to hold exactly one unit, so the tenant count
    // doubles as the occupied-unit count.
    let occupied_units = total_tenants;
    let available_units = snapshot.properties.len().saturating_sub(occupied_units);

    let month = today.month0();
    let year = today.year();
    let paid_count = snapshot
        .payments
        .iter()
        .filter(|payment| {
            payment.year == year && payment.month == month && payment.status == PaymentStatus::Paid
        })
        .count();

    DashboardStats {
        total_tenants,
        occupied_units,
        available_units,
        paid_count,
        unpaid_count: total_tenants.saturating_sub(paid_count),
    }
}

/// Resolves a tenant's unit reference to the property name, or "N/A" when
/// the reference is null or points at a property that no longer exists.
pub fn unit_name(snapshot: &Snapshot, unit_id: Option<i64>) -> String {
    unit_id
        .and_then(|id| snapshot.properties.iter().find(|property| property.id == id))
        .map(|property| property.name.clone())
        .unwrap_or_else(|| MISSING_UNIT.to_string())
}

pub fn occupancy_status(snapshot: &Snapshot, property_id: i64) -> Occupancy {
    let occupied = snapshot
        .tenants
        .iter()
        .any(|tenant| tenant.unit_id == Some(property_id));
    if occupied {
        Occupancy::Occupied
    } else {
        Occupancy::Vacant
    }
}

/// Properties with no tenant assigned. `excluding` re-includes one specific
/// unit so that a tenant being edited can keep their current assignment.
pub fn available_units(snapshot: &Snapshot, excluding: Option<i64>) -> Vec<&Property> {
    snapshot
        .properties
        .iter()
        .filter(|property| {
            excluding == Some(property.id)
                || !snapshot
                    .tenants
                    .iter()
                    .any(|tenant| tenant.unit_id == Some(property.id))
        })
        .collect()
}

/// Payment status for every month of `year`, exactly 12 entries, defaulting
/// to unpaid where the backend has no record.
pub fn monthly_status(snapshot: &Snapshot, tenant_id: i64, year: i32) -> Vec<MonthStatus> {
    (0..12)
        .map(|month| {
            let status = snapshot
                .payments
                .iter()
                .find(|payment| {
                    payment.tenant_id == tenant_id
                        && payment.year == year
                        && payment.month == month
                })
                .map(|payment| payment.status)
                .unwrap_or(PaymentStatus::Unpaid);
            MonthStatus {
                month,
                year,
                status,
            }
        })
        .collect()
}
