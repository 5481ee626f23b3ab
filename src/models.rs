use serde::{Deserialize, Serialize};

/// A tenant as stored by the backend. `unit_id` references a `Property` id
/// and may be absent or dangling; rendering falls back to "N/A" in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub unit_id: Option<i64>,
}

/// A rental unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

/// One rent payment record. Months are zero-based (0 = January). A missing
/// record for a (tenant, month, year) triple means the month is unpaid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub tenant_id: i64,
    pub month: u32,
    pub year: i32,
    pub status: PaymentStatus,
}

/// Everything the backend knows, fetched in one round trip. The store only
/// ever swaps whole snapshots, so the three collections stay mutually
/// consistent as of the last reload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub tenants: Vec<Tenant>,
    pub properties: Vec<Property>,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPayload {
    pub name: String,
    pub contact: String,
    pub unit_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyPayload {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglePaymentRequest {
    pub tenant_id: i64,
    pub month: u32,
    pub year: i32,
}

/// Whether a property currently has a tenant assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Occupied,
    Vacant,
}

impl Occupancy {
    pub fn label(self) -> &'static str {
        match self {
            Occupancy::Occupied => "Occupied",
            Occupancy::Vacant => "Vacant",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tenants: usize,
    pub occupied_units: usize,
    pub available_units: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthStatus {
    pub month: u32,
    pub year: i32,
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize)]
pub struct RentStatusResponse {
    pub tenant_id: i64,
    pub year: i32,
    pub months: Vec<MonthStatus>,
}
