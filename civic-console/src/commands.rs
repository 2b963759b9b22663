//! Subcommand handlers
//!
//! Each handler drives the same view logic a console page would: list views,
//! forms, cascading selects and the collection monitor. Results are printed
//! as text, or as JSON with `--json`.

use anyhow::{Context, bail};
use civic_client::monitor::FilterOptions;
use civic_client::{
    AdminApi, CascadingSelector, CollectionFilter, CollectionMonitor, CollectionSummary,
    Confirm, DeleteOutcome, HouseholdStatus, HttpClient, ListView, ResourceForm, SubmitOutcome,
    TelemetryClient,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::hierarchy::{GeoLevel, HasGeoPath, SelectOption};
use shared::models::{FleetSummary, UserWithType, Vehicle};
use shared::resource::{FormMode, Resource, ResourceKind};

/// Where results are printed
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Row {
    id: i64,
    name: String,
    active: bool,
}

pub async fn list<R: Resource, C: HttpClient>(
    api: &AdminApi<C>,
    out: Output,
    active_only: bool,
) -> anyhow::Result<()> {
    let mut view = ListView::<R>::new();
    view.refresh(api).await;

    let rows: Vec<Row> = view
        .records()
        .iter()
        .filter(|r| !active_only || r.is_selectable())
        .map(|r| Row {
            id: r.id(),
            name: r.display_name(),
            active: r.is_active(),
        })
        .collect();

    out.emit(&rows, || {
        let mut text = format!("{} {}", rows.len(), R::KIND.plural());
        for row in &rows {
            let marker = if row.active { "" } else { "  (inactive)" };
            text.push_str(&format!("\n{:>6}  {}{}", row.id, row.name, marker));
        }
        text
    })
}

/// User list with each user's type name
pub async fn list_users<C: HttpClient>(api: &AdminApi<C>, out: Output) -> anyhow::Result<()> {
    let mut users: Vec<UserWithType> = api.users_with_types().await?;
    users.sort_by_key(|u| u.user.id);

    out.emit(&users, || {
        let mut text = format!("{} {}", users.len(), ResourceKind::User.plural());
        for u in &users {
            text.push_str(&format!(
                "\n{:>6}  {:<20} {}",
                u.user.id, u.user.username, u.user_type_name
            ));
        }
        text
    })
}

pub async fn show<R: Resource, C: HttpClient>(
    api: &AdminApi<C>,
    out: Output,
    id: i64,
) -> anyhow::Result<()> {
    let mut form = ResourceForm::<R>::new(FormMode::Edit(id));
    let record = match form.load(api).await {
        Ok(Some(record)) => record,
        Ok(None) => bail!("{} {} not found", R::KIND.label(), id),
        Err(notice) => bail!("{notice}"),
    };
    out.emit(&record, || {
        serde_json::to_string_pretty(&record).unwrap_or_else(|_| format!("{record:?}"))
    })
}

/// Create, or update `id`, from a JSON object
///
/// In edit mode the stored record is loaded first, so `data` only needs the
/// fields that change.
pub async fn save<R: Resource, C: HttpClient>(
    api: &AdminApi<C>,
    out: Output,
    id: Option<i64>,
    data: &str,
) -> anyhow::Result<()> {
    let mut form = ResourceForm::<R>::new(FormMode::from_route_id(id));
    if let Err(notice) = form.load(api).await {
        bail!("{notice}");
    }
    form.payload = merge_payload(&form.payload, data)?;

    match form.submit(api).await {
        SubmitOutcome::Saved {
            notice,
            navigate_to,
        } => out.emit(&notice.title, || format!("{notice}\n-> {navigate_to}")),
        SubmitOutcome::Rejected(notice) | SubmitOutcome::Failed(notice) => bail!("{notice}"),
    }
}

/// Overlay the fields of a JSON object onto a payload
pub fn merge_payload<P: Serialize + DeserializeOwned>(base: &P, data: &str) -> anyhow::Result<P> {
    let patch: Value = serde_json::from_str(data).context("--data is not valid JSON")?;
    let Value::Object(patch) = patch else {
        bail!("--data must be a JSON object");
    };
    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(patch);
    }
    serde_json::from_value(merged).context("--data does not match the form fields")
}

pub async fn delete<R: Resource, C: HttpClient>(
    api: &AdminApi<C>,
    out: Output,
    id: i64,
    confirm: &dyn Confirm,
) -> anyhow::Result<()> {
    let mut view = ListView::<R>::new();
    match view.delete(api, id, confirm).await {
        DeleteOutcome::Cancelled => out.emit(&"cancelled", || "Cancelled".to_string()),
        DeleteOutcome::Deleted(notice) => {
            let remaining = view.records().len();
            out.emit(&notice.title, || {
                format!("{notice}\n{remaining} {} remain", R::KIND.plural())
            })
        }
        DeleteOutcome::Failed(notice) => bail!("{notice}"),
    }
}

pub async fn options<C: HttpClient>(
    api: &AdminApi<C>,
    out: Output,
    level: GeoLevel,
    parent: Option<i64>,
) -> anyhow::Result<()> {
    let options = api.options(level, parent).await?;
    out.emit(&options, || render_options(&options))
}

fn render_options(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| format!("{:>6}  {}", o.value, o.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One level of a pre-populated selector
#[derive(Debug, Serialize)]
pub struct CascadeRow {
    pub level: GeoLevel,
    pub stored: Option<i64>,
    pub selected: Option<i64>,
    pub label: Option<String>,
    pub options: usize,
}

/// Pre-populate the edit form selectors of one record and report each level
pub async fn cascade<R: Resource + HasGeoPath, C: HttpClient>(
    api: &AdminApi<C>,
    out: Output,
    id: i64,
) -> anyhow::Result<()> {
    let mut selector = CascadingSelector::for_form(R::KIND)
        .with_context(|| format!("{} forms have no geographic selects", R::KIND.label()))?;
    let record: R = api.get(id).await?;
    let stored = record.geo_path();
    selector.preload(api, &stored).await;

    let rows = cascade_rows(&selector, &stored);
    out.emit(&rows, || {
        let mut text = format!("Edit {} #{}: {}", R::KIND.label(), id, record.display_name());
        for row in &rows {
            let choice = match (&row.label, row.stored) {
                (Some(label), _) => label.clone(),
                (None, Some(stored)) => format!("- (stored {stored} not available)"),
                (None, None) => "-".to_string(),
            };
            text.push_str(&format!(
                "\n{:<9} {:<30} [{} options]",
                row.level, choice, row.options
            ));
        }
        text
    })
}

pub fn cascade_rows(
    selector: &CascadingSelector,
    stored: &shared::hierarchy::GeoPath,
) -> Vec<CascadeRow> {
    let levels: Vec<GeoLevel> = selector.levels().collect();
    levels
        .into_iter()
        .map(|level| CascadeRow {
            level,
            stored: stored.get(level),
            selected: selector.selected(level),
            label: selector.selected_label(level).map(str::to_string),
            options: selector.options(level).len(),
        })
        .collect()
}

#[derive(Serialize)]
struct FleetView<'a> {
    summary: FleetSummary,
    vehicles: &'a [Vehicle],
}

fn render_fleet(summary: &FleetSummary, vehicles: &[Vehicle]) -> String {
    let mut text = String::new();
    for v in vehicles {
        text.push_str(&format!(
            "{:<14} {:<8} {:>6.1} km/h  {}\n",
            v.number, v.status, v.speed, v.location
        ));
    }
    text.push_str(&format!(
        "total {}  running {}  idle {}  parked {}  no data {}",
        summary.total, summary.running, summary.idle, summary.parked, summary.no_data
    ));
    text
}

pub async fn vehicles<T: HttpClient>(
    telemetry: &TelemetryClient<T>,
    out: Output,
) -> anyhow::Result<()> {
    let vehicles = telemetry.fetch().await?;
    let summary = FleetSummary::from_vehicles(&vehicles);
    out.emit(
        &FleetView {
            summary,
            vehicles: &vehicles,
        },
        || render_fleet(&summary, &vehicles),
    )
}

#[derive(Serialize)]
struct MonitorView<'a> {
    filter: CollectionFilter,
    summary: CollectionSummary,
    households: Vec<SelectOption>,
    fleet: FleetSummary,
    vehicles: &'a [Vehicle],
    filters: FilterOptions,
}

pub async fn monitor<C: HttpClient, T: HttpClient>(
    api: &AdminApi<C>,
    telemetry: &TelemetryClient<T>,
    out: Output,
    filter: CollectionFilter,
    status: HouseholdStatus,
) -> anyhow::Result<()> {
    let mut monitor = CollectionMonitor::new(filter);
    monitor.refresh(api, telemetry).await;

    let summary = monitor.summary();
    let fleet = monitor.fleet();
    let households: Vec<SelectOption> = monitor
        .households(status)
        .into_iter()
        .map(|c| SelectOption {
            value: c.id,
            label: c.display_name(),
        })
        .collect();
    let filters = monitor.filter_options(api).await;

    let view = MonitorView {
        filter,
        summary,
        households,
        fleet,
        vehicles: monitor.vehicles(),
        filters,
    };
    out.emit(&view, || {
        format!(
            "Collections on {}\ntotal household {}  collected {}  not collected {}\n\n{}\n\n{}",
            filter.date,
            summary.total_household,
            summary.collected,
            summary.not_collected,
            render_options(&view.households),
            render_fleet(&fleet, view.vehicles)
        )
    })
}
