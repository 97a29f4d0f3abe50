use tracing::{info, warn};

use crate::config::DbConfig;
use crate::db::models::{HostTotal, Record};
use crate::db::store::{Connector, LATEST_LIMIT, RecordStore};
use crate::error::DemoError;
use crate::service::host_info::HostInfo;

/// Shown once the connection is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSummary {
    pub host: String,
    pub database: String,
    pub server_version: String,
}

/// Failure raised by any database step, with the host that was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    pub host: String,
}

/// Everything one page render needs.
///
/// `latest` and `totals` are only filled when every step succeeded;
/// `connection` and `inserted` keep whatever was reached before a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub info: HostInfo,
    pub connection: Option<ConnectionSummary>,
    pub inserted: Option<Record>,
    pub latest: Vec<Record>,
    pub totals: Vec<HostTotal>,
    pub failure: Option<Failure>,
}

impl PageReport {
    fn new(info: HostInfo) -> Self {
        Self {
            info,
            connection: None,
            inserted: None,
            latest: Vec::new(),
            totals: Vec::new(),
            failure: None,
        }
    }

    fn fail(&mut self, cfg: &DbConfig, err: DemoError) {
        warn!(host = %cfg.host, database = %cfg.name, error = %err, "database step failed");
        self.failure = Some(Failure {
            message: err.to_string(),
            host: cfg.host.clone(),
        });
    }
}

/// Connect, insert `record`, read both tables, close.
///
/// Never returns an error: a failure stops the remaining steps and is kept
/// in [`PageReport::failure`] for the page to show.
pub async fn build_report<C: Connector>(
    connector: &C,
    cfg: &DbConfig,
    info: HostInfo,
    record: Record,
) -> PageReport {
    let mut report = PageReport::new(info);

    let mut store = match connector.connect(cfg).await {
        Ok(store) => store,
        Err(e) => {
            report.fail(cfg, e);
            return report;
        }
    };
    report.connection = Some(ConnectionSummary {
        host: cfg.host.clone(),
        database: cfg.name.clone(),
        server_version: store.server_version().to_string(),
    });

    if let Err(e) = insert_and_read(&mut store, &mut report, record).await {
        report.fail(cfg, e);
    }

    if let Err(e) = store.close().await {
        warn!(host = %cfg.host, error = %e, "failed to close database connection");
    }
    report
}

async fn insert_and_read<S: RecordStore>(
    store: &mut S,
    report: &mut PageReport,
    record: Record,
) -> Result<(), DemoError> {
    // CREATE is checked against privileges even when the table exists.
    if let Err(e) = store.ensure_schema().await {
        warn!(error = %e, "schema bootstrap failed; assuming `dados` exists");
    }
    store.insert(&record).await?;
    info!(id = record.id, host = %record.host, city = %record.city, "record inserted");
    report.inserted = Some(record);

    let (latest, totals) = read_tables(store).await?;
    report.latest = latest;
    report.totals = totals;
    Ok(())
}

/// Read both tables without writing anything.
pub async fn read_tables<S: RecordStore>(
    store: &mut S,
) -> Result<(Vec<Record>, Vec<HostTotal>), DemoError> {
    let latest = store.latest(LATEST_LIMIT).await?;
    let totals = store.host_totals().await?;
    Ok((latest, totals))
}
