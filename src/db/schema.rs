//! DDL for the `dados` table.
//!
//! Column names follow the table the load-balancing demo has always used,
//! so an existing database is accepted as-is. `Host` is sized for fully
//! qualified hostnames. `AlunoID` is not a key: ids are random and may repeat.

pub const DADOS_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS dados (
    AlunoID INT,
    Nome VARCHAR(50),
    Sobrenome VARCHAR(50),
    Endereco VARCHAR(150),
    Cidade VARCHAR(50),
    Host VARCHAR(255)
)
"#;
