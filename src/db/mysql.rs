use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, MySql};
use tracing::debug;

use crate::config::DbConfig;
use crate::db::models::{HostTotal, Record};
use crate::db::schema::DADOS_INIT;
use crate::db::store::{Connector, RecordStore};
use crate::error::DemoError;

/// Connects straight to MySQL without pooling; every request pays for its own handshake.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnector;

impl MySqlConnector {
    fn options(cfg: &DbConfig) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.name)
    }
}

impl Connector for MySqlConnector {
    type Store = MySqlStore;

    async fn connect(&self, cfg: &DbConfig) -> Result<MySqlStore, DemoError> {
        let options = Self::options(cfg);
        let mut conn = MySqlConnection::connect_with(&options).await?;
        let (server_version,): (String,) = sqlx::query_as("SELECT VERSION()")
            .fetch_one(&mut conn)
            .await?;
        debug!(host = %cfg.host, database = %cfg.name, %server_version, "connected to MySQL");
        Ok(MySqlStore {
            conn,
            server_version,
        })
    }
}

pub struct MySqlStore {
    conn: MySqlConnection,
    server_version: String,
}

impl RecordStore for MySqlStore {
    fn server_version(&self) -> &str {
        &self.server_version
    }

    async fn ensure_schema(&mut self) -> Result<(), DemoError> {
        sqlx::query(DADOS_INIT).execute(&mut self.conn).await?;
        Ok(())
    }

    async fn insert(&mut self, record: &Record) -> Result<(), DemoError> {
        sqlx::query::<MySql>(
            r#"INSERT INTO dados (AlunoID, Nome, Sobrenome, Endereco, Cidade, Host)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(record.id)
        .bind(record.name.as_str())
        .bind(record.surname.as_str())
        .bind(record.address.as_str())
        .bind(record.city.as_str())
        .bind(record.host.as_str())
        .execute(&mut self.conn)
        .await?;
        Ok(())
    }

    async fn latest(&mut self, limit: u32) -> Result<Vec<Record>, DemoError> {
        let rows = sqlx::query_as::<MySql, Record>(
            r#"SELECT AlunoID, Nome, Sobrenome, Endereco, Cidade, Host
               FROM dados ORDER BY AlunoID DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&mut self.conn)
        .await?;
        Ok(rows)
    }

    async fn host_totals(&mut self) -> Result<Vec<HostTotal>, DemoError> {
        let rows = sqlx::query_as::<MySql, HostTotal>(
            r#"SELECT Host, COUNT(*) AS total
               FROM dados GROUP BY Host ORDER BY total DESC, Host ASC"#,
        )
        .fetch_all(&mut self.conn)
        .await?;
        Ok(rows)
    }

    async fn close(self) -> Result<(), DemoError> {
        self.conn.close().await?;
        Ok(())
    }
}
