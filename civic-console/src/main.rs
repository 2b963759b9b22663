//! `civic` - command-line admin console for the masters backend

mod commands;
mod logger;
mod prompt;

use anyhow::bail;
use chrono::NaiveDate;
use civic_client::{
    AdminApi, ClientConfig, CollectionFilter, Confirm, HouseholdStatus, NetworkHttpClient,
    TelemetryClient,
};
use clap::{Parser, Subcommand, ValueEnum};
use commands::Output;
use shared::hierarchy::GeoLevel;
use shared::models::*;
use shared::resource::ResourceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "civic", version, about = "Admin console for civic master data")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "CIVIC_API_URL")]
    api_url: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "CIVIC_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CIVIC_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Also write daily rolling log files here
    #[arg(long, global = true, env = "CIVIC_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List records of one resource, ordered by id
    List {
        kind: ResourceKind,
        /// Hide inactive and soft-deleted records
        #[arg(long)]
        active_only: bool,
    },
    /// Show one record
    Show { kind: ResourceKind, id: i64 },
    /// Create a record, or update one with --id
    Save {
        kind: ResourceKind,
        #[arg(long)]
        id: Option<i64>,
        /// JSON object with the form fields
        #[arg(long)]
        data: String,
    },
    /// Delete a record after confirmation
    Delete {
        kind: ResourceKind,
        id: i64,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Selectable options for one geographic level
    Options {
        level: GeoLevel,
        /// Id of the selected parent level
        #[arg(long)]
        parent: Option<i64>,
    },
    /// Pre-populate the cascading selects of a record's edit form
    Cascade { kind: ResourceKind, id: i64 },
    /// Live vehicle positions
    Vehicles,
    /// Waste collection monitor
    Monitor {
        /// Collection date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        zone: Option<i64>,
        #[arg(long)]
        ward: Option<i64>,
        #[arg(long)]
        customer: Option<i64>,
        /// Household set to list
        #[arg(long, value_enum, default_value_t = Households::NotCollected)]
        households: Households,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Households {
    Collected,
    NotCollected,
    All,
}

impl From<Households> for HouseholdStatus {
    fn from(value: Households) -> Self {
        match value {
            Households::Collected => HouseholdStatus::Collected,
            Households::NotCollected => HouseholdStatus::NotCollected,
            Households::All => HouseholdStatus::TotalHousehold,
        }
    }
}

/// Bind `$r` to the record type of `$kind` and evaluate `$body`
macro_rules! with_resource {
    ($kind:expr, $r:ident => $body:expr) => {
        match $kind {
            ResourceKind::Continent => { type $r = Continent; $body }
            ResourceKind::Country => { type $r = Country; $body }
            ResourceKind::State => { type $r = State; $body }
            ResourceKind::District => { type $r = District; $body }
            ResourceKind::City => { type $r = City; $body }
            ResourceKind::Zone => { type $r = Zone; $body }
            ResourceKind::Ward => { type $r = Ward; $body }
            ResourceKind::Property => { type $r = Property; $body }
            ResourceKind::SubProperty => { type $r = SubProperty; $body }
            ResourceKind::Customer => { type $r = Customer; $body }
            ResourceKind::Fuel => { type $r = Fuel; $body }
            ResourceKind::VehicleType => { type $r = VehicleType; $body }
            ResourceKind::UserType => { type $r = UserType; $body }
            ResourceKind::User => { type $r = User; $body }
            ResourceKind::WasteCollection => { type $r = WasteCollection; $body }
        }
    };
}

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(token) = &cli.token {
        config = config.with_token(token.clone());
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let _log_guard = logger::init_logger(&cli.log_level, cli.log_dir.as_deref())?;

    let config = client_config(&cli);
    tracing::debug!(base_url = %config.base_url, "starting civic console");
    let api = AdminApi::new(NetworkHttpClient::new(&config)?);
    let out = Output::new(cli.json);

    match cli.command {
        Commands::List {
            kind: ResourceKind::User,
            ..
        } => commands::list_users(&api, out).await,
        Commands::List { kind, active_only } => {
            with_resource!(kind, R => commands::list::<R, _>(&api, out, active_only).await)
        }
        Commands::Show { kind, id } => {
            with_resource!(kind, R => commands::show::<R, _>(&api, out, id).await)
        }
        Commands::Save { kind, id, data } => {
            with_resource!(kind, R => commands::save::<R, _>(&api, out, id, &data).await)
        }
        Commands::Delete { kind, id, yes } => {
            let confirm: &dyn Confirm = if yes {
                &prompt::AssumeYes
            } else {
                &prompt::TerminalConfirm
            };
            with_resource!(kind, R => commands::delete::<R, _>(&api, out, id, confirm).await)
        }
        Commands::Options { level, parent } => commands::options(&api, out, level, parent).await,
        Commands::Cascade { kind, id } => match kind {
            ResourceKind::Country => commands::cascade::<Country, _>(&api, out, id).await,
            ResourceKind::State => commands::cascade::<State, _>(&api, out, id).await,
            ResourceKind::District => commands::cascade::<District, _>(&api, out, id).await,
            ResourceKind::City => commands::cascade::<City, _>(&api, out, id).await,
            ResourceKind::Zone => commands::cascade::<Zone, _>(&api, out, id).await,
            ResourceKind::Ward => commands::cascade::<Ward, _>(&api, out, id).await,
            ResourceKind::Customer => commands::cascade::<Customer, _>(&api, out, id).await,
            other => bail!("{} forms have no geographic selects", other.label()),
        },
        Commands::Vehicles => {
            let telemetry = TelemetryClient::from_config(&config)?;
            commands::vehicles(&telemetry, out).await
        }
        Commands::Monitor {
            date,
            zone,
            ward,
            customer,
            households,
        } => {
            let telemetry = TelemetryClient::from_config(&config)?;
            let filter = CollectionFilter {
                zone,
                ward,
                customer,
                ..date.map(CollectionFilter::on).unwrap_or_default()
            };
            commands::monitor(&api, &telemetry, out, filter, households.into()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_save() {
        let cli = Cli::try_parse_from([
            "civic",
            "save",
            "sub-property",
            "--id",
            "4",
            "--data",
            r#"{"sub_property_name": "Flat"}"#,
        ])
        .unwrap();
        let Commands::Save { kind, id, data } = cli.command else {
            panic!("expected save");
        };
        assert_eq!(kind, ResourceKind::SubProperty);
        assert_eq!(id, Some(4));
        assert!(data.contains("Flat"));
    }

    #[test]
    fn test_parse_monitor_defaults() {
        let cli = Cli::try_parse_from(["civic", "monitor", "--zone", "5", "--date", "2024-03-01"])
            .unwrap();
        let Commands::Monitor {
            date,
            zone,
            households,
            ..
        } = cli.command
        else {
            panic!("expected monitor");
        };
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(zone, Some(5));
        assert_eq!(
            HouseholdStatus::from(households),
            HouseholdStatus::NotCollected
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["civic", "list", "planets"]).is_err());
        assert!(Cli::try_parse_from(["civic", "options", "ward", "--parent", "5"]).is_ok());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "civic",
            "--api-url",
            "https://masters.example.org/api",
            "--timeout",
            "5",
            "vehicles",
        ])
        .unwrap();
        let config = client_config(&cli);
        assert_eq!(config.base_url, "https://masters.example.org/api");
        assert_eq!(config.timeout, 5);
    }
}
