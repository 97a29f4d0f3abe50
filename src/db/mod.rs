//! Database module: row models, schema and the store seam.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring `dados` rows and aggregates
//! - `schema.rs`: DDL for the create-if-absent bootstrap
//! - `store.rs`: traits the request flow is written against
//! - `mysql.rs`: the MySQL implementation backed by one connection per request

pub mod models;
pub mod mysql;
pub mod schema;
pub mod store;

pub use models::{HostTotal, Record};
pub use mysql::{MySqlConnector, MySqlStore};
pub use schema::DADOS_INIT;
pub use store::{Connector, RecordStore};
