use std::future::Future;

use crate::config::DbConfig;
use crate::db::models::{HostTotal, Record};
use crate::error::DemoError;

/// Rows fetched for the "latest records" table.
pub const LATEST_LIMIT: u32 = 10;

/// An open session against the `dados` table.
///
/// Each call is one independent statement: there is no transaction and no
/// retry. The session is consumed by [`RecordStore::close`].
pub trait RecordStore: Send {
    /// Version string reported by the server at connect time.
    fn server_version(&self) -> &str;

    /// Create `dados` when it does not exist yet.
    fn ensure_schema(&mut self) -> impl Future<Output = Result<(), DemoError>> + Send;

    fn insert(&mut self, record: &Record) -> impl Future<Output = Result<(), DemoError>> + Send;

    /// Up to `limit` rows ordered by `AlunoID` descending.
    fn latest(
        &mut self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Record>, DemoError>> + Send;

    /// Row count per `Host`, largest first.
    fn host_totals(&mut self) -> impl Future<Output = Result<Vec<HostTotal>, DemoError>> + Send;

    fn close(self) -> impl Future<Output = Result<(), DemoError>> + Send;
}

/// Opens a fresh [`RecordStore`] for each request.
pub trait Connector: Clone + Send + Sync + 'static {
    type Store: RecordStore;

    fn connect(
        &self,
        cfg: &DbConfig,
    ) -> impl Future<Output = Result<Self::Store, DemoError>> + Send;
}
