use sqlx::FromRow;

/// One `dados` row: a synthetic student tagged with the container that wrote it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Record {
    #[sqlx(rename = "AlunoID")]
    pub id: i64,
    #[sqlx(rename = "Nome")]
    pub name: String,
    #[sqlx(rename = "Sobrenome")]
    pub surname: String,
    #[sqlx(rename = "Endereco")]
    pub address: String,
    #[sqlx(rename = "Cidade")]
    pub city: String,
    #[sqlx(rename = "Host")]
    pub host: String,
}

/// Row count for one container.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct HostTotal {
    #[sqlx(rename = "Host")]
    pub host: String,
    pub total: i64,
}
