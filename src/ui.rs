use crate::models::{DashboardStats, MonthStatus, PaymentStatus, Snapshot, Tenant};
use crate::stats::{available_units, occupancy_status, unit_name};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The three navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Tenants,
    Properties,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Tenants => "/tenants",
            View::Properties => "/properties",
        }
    }

    fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tenants => "Tenants",
            View::Properties => "Properties",
        }
    }
}

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let body = format!(
        r#"<section class="panel">
  <div class="stat"><span class="label">Total Tenants</span><span class="value">{total}</span></div>
  <div class="stat"><span class="label">Available Units</span><span class="value">{available}</span></div>
  <div class="stat"><span class="label">Rent Paid (This Month)</span><span class="value paid">{paid}</span></div>
  <div class="stat"><span class="label">Rent Unpaid (This Month)</span><span class="value unpaid">{unpaid}</span></div>
</section>
{refresh}"#,
        total = stats.total_tenants,
        available = stats.available_units,
        paid = stats.paid_count,
        unpaid = stats.unpaid_count,
        refresh = refresh_form(View::Dashboard),
    );
    render_page("Dashboard", Some(View::Dashboard), &body)
}

pub fn render_tenants(snapshot: &Snapshot) -> String {
    let mut rows = String::new();
    for tenant in &snapshot.tenants {
        let unit = unit_name(snapshot, tenant.unit_id);
        rows.push_str(&format!(
            r#"<tr>
  <td>{name}</td>
  <td>{contact}</td>
  <td>{unit}</td>
  <td class="actions">
    <a class="action-btn" href="/tenants/{id}/rent">Rent</a>
    <a class="action-btn" href="/tenants/{id}/edit">Edit</a>
    <form method="post" action="/tenants/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this tenant?');">
      <button class="action-btn danger" type="submit">Delete</button>
    </form>
  </td>
</tr>
"#,
            name = escape(&tenant.name),
            contact = escape(&tenant.contact),
            unit = escape(&unit),
            id = tenant.id,
        ));
    }

    let body = format!(
        r#"<section class="toolbar">
  <a class="button" href="/tenants/new">Add Tenant</a>
  {refresh}
</section>
<table>
  <thead><tr><th>Name</th><th>Contact</th><th>Unit</th><th>Actions</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>"#,
        refresh = refresh_form(View::Tenants),
    );
    render_page("Tenants", Some(View::Tenants), &body)
}

pub fn render_properties(snapshot: &Snapshot) -> String {
    let mut rows = String::new();
    for property in &snapshot.properties {
        let status = occupancy_status(snapshot, property.id);
        rows.push_str(&format!(
            r#"<tr>
  <td>{name}</td>
  <td>{status}</td>
  <td class="actions">
    <form method="post" action="/properties/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this property?');">
      <button class="action-btn danger" type="submit">Delete</button>
    </form>
  </td>
</tr>
"#,
            name = escape(&property.name),
            status = status.label(),
            id = property.id,
        ));
    }

    let body = format!(
        r#"<section class="toolbar">
  <form method="post" action="/properties" class="inline-form">
    <input type="text" name="name" placeholder="Property name" required />
    <button class="button" type="submit">Add Property</button>
  </form>
  {refresh}
</section>
<table>
  <thead><tr><th>Name</th><th>Status</th><th>Actions</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>"#,
        refresh = refresh_form(View::Properties),
    );
    render_page("Properties", Some(View::Properties), &body)
}

/// Create/edit tenant form. The hidden id field is what the submission
/// handler dispatches on: empty means create, otherwise update. When editing,
/// the tenant's current unit stays selectable alongside the vacant ones.
pub fn render_tenant_form(snapshot: &Snapshot, tenant: Option<&Tenant>) -> String {
    let current_unit = tenant.and_then(|t| t.unit_id);
    let placeholder_selected = if current_unit.is_none() { " selected" } else { "" };
    let mut options = format!(
        r#"<option value="" disabled{placeholder_selected}>Select a unit</option>"#
    );
    for unit in available_units(snapshot, current_unit) {
        let selected = if current_unit == Some(unit.id) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{id}"{selected}>{name}</option>"#,
            id = unit.id,
            name = escape(&unit.name),
        ));
    }

    let (title, id_value, name, contact) = match tenant {
        Some(tenant) => (
            "Edit Tenant",
            tenant.id.to_string(),
            escape(&tenant.name),
            escape(&tenant.contact),
        ),
        None => ("Add New Tenant", String::new(), String::new(), String::new()),
    };

    let body = format!(
        r#"<form method="post" action="/tenants/save" class="card-form">
  <h2>{title}</h2>
  <input type="hidden" name="id" value="{id_value}" />
  <label>Name <input type="text" name="name" value="{name}" required /></label>
  <label>Contact <input type="text" name="contact" value="{contact}" required /></label>
  <label>Unit <select name="unit_id">{options}</select></label>
  <div class="form-actions">
    <button class="button" type="submit">Save</button>
    <a class="button ghost" href="/tenants">Cancel</a>
  </div>
</form>"#,
    );
    render_page(title, Some(View::Tenants), &body)
}

/// Twelve month cards for one tenant and year, each with a toggle button.
pub fn render_rent(tenant: &Tenant, months: &[MonthStatus]) -> String {
    let mut cards = String::new();
    for entry in months {
        let next_label = match entry.status {
            PaymentStatus::Paid => "Mark as Unpaid",
            PaymentStatus::Unpaid => "Mark as Paid",
        };
        cards.push_str(&format!(
            r#"<div class="month-status {status}">
  <h4>{month} {year}</h4>
  <p>{status_upper}</p>
  <form method="post" action="/payments/toggle">
    <input type="hidden" name="tenant_id" value="{tenant_id}" />
    <input type="hidden" name="month" value="{month_index}" />
    <input type="hidden" name="year" value="{year}" />
    <button class="action-btn" type="submit">{next_label}</button>
  </form>
</div>
"#,
            status = entry.status.label(),
            status_upper = entry.status.label().to_uppercase(),
            month = MONTHS[entry.month as usize % 12],
            month_index = entry.month,
            year = entry.year,
            tenant_id = tenant.id,
        ));
    }

    let body = format!(
        r#"<section class="toolbar">
  <h2>Rent Status for {name}</h2>
  <a class="button ghost" href="/tenants">Back to Tenants</a>
</section>
<section class="month-grid">
{cards}</section>"#,
        name = escape(&tenant.name),
    );
    render_page("Rent Status", Some(View::Tenants), &body)
}

pub fn render_error(message: &str) -> String {
    let body = format!(
        r#"<section class="error-card">
  <h2>Something went wrong</h2>
  <p>{message}</p>
  <a class="button" href="/">Back to Dashboard</a>
</section>"#,
        message = escape(message),
    );
    render_page("Error", None, &body)
}

fn render_page(title: &str, active: Option<View>, body: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{NAV}}", &nav_links(active))
        .replace("{{BODY}}", body)
}

fn nav_links(active: Option<View>) -> String {
    [View::Dashboard, View::Tenants, View::Properties]
        .into_iter()
        .map(|view| {
            let class = if active == Some(view) {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"<a class="{class}" href="{path}">{label}</a>"#,
                path = view.path(),
                label = view.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn refresh_form(view: View) -> String {
    format!(
        r#"<form method="post" action="/reload" class="inline-form">
    <input type="hidden" name="next" value="{next}" />
    <button class="button ghost" type="submit">Refresh</button>
  </form>"#,
        next = view.path(),
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} - Rental Manager</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #2b2a28;
      --accent: #2f6fed;
      --paid: #1d8a4e;
      --unpaid: #c0392b;
      --card: #ffffff;
      --shadow: 0 8px 24px rgba(43, 42, 40, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 28px 32px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 16px;
      margin-bottom: 24px;
      flex-wrap: wrap;
    }

    h1 {
      font-size: 1.5rem;
      margin: 0;
    }

    nav {
      display: flex;
      gap: 4px;
    }

    .nav-link {
      padding: 8px 14px;
      border-radius: 8px;
      text-decoration: none;
      color: var(--ink);
    }

    .nav-link.active {
      background: var(--accent);
      color: white;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
      margin-bottom: 20px;
    }

    .stat {
      background: var(--bg);
      border-radius: 10px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #6b6861;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .stat .value.paid { color: var(--paid); }
    .stat .value.unpaid { color: var(--unpaid); }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 10px 12px;
      border-bottom: 1px solid #e4e1dc;
    }

    .toolbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 18px;
      flex-wrap: wrap;
    }

    .inline-form {
      display: flex;
      gap: 8px;
      margin: 0;
    }

    .button {
      display: inline-block;
      background: var(--accent);
      color: white;
      border: none;
      border-radius: 8px;
      padding: 8px 16px;
      font-size: 0.95rem;
      text-decoration: none;
      cursor: pointer;
    }

    .button.ghost {
      background: transparent;
      color: var(--accent);
      border: 1px solid var(--accent);
    }

    .actions {
      display: flex;
      gap: 6px;
      align-items: center;
    }

    .actions form { margin: 0; }

    .action-btn {
      background: #eef1f5;
      border: none;
      border-radius: 6px;
      padding: 6px 10px;
      font-size: 0.85rem;
      color: var(--ink);
      text-decoration: none;
      cursor: pointer;
    }

    .action-btn.danger {
      background: #fdecea;
      color: var(--unpaid);
    }

    .card-form {
      display: grid;
      gap: 14px;
      max-width: 420px;
    }

    .card-form label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
    }

    .card-form input, .card-form select, .inline-form input {
      padding: 8px 10px;
      border: 1px solid #d5d1ca;
      border-radius: 8px;
      font-size: 0.95rem;
    }

    .form-actions {
      display: flex;
      gap: 10px;
    }

    .month-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
      gap: 12px;
    }

    .month-status {
      border-radius: 10px;
      padding: 12px;
      display: grid;
      gap: 6px;
      text-align: center;
      border: 1px solid #e4e1dc;
    }

    .month-status h4, .month-status p { margin: 0; }

    .month-status.paid { border-color: var(--paid); }
    .month-status.paid p { color: var(--paid); font-weight: 600; }
    .month-status.unpaid p { color: var(--unpaid); font-weight: 600; }

    .error-card {
      display: grid;
      gap: 12px;
      justify-items: start;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Rental Manager</h1>
      <nav>
      {{NAV}}
      </nav>
    </header>
    <main>
{{BODY}}
    </main>
  </div>
</body>
</html>
"#;
