use crate::db::models::{HostTotal, Record};
use crate::render::escape::escape_html;
use crate::service::report::{ConnectionSummary, Failure, PageReport};

const STYLE: &str = include_str!("page.css");

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Microsserviços Docker - Toshiro Shibakita</title>
"#;

const FOOTER: &str = r#"        <div class="footer">
            <p><strong>🚀 Projeto Toshiro Shibakita - Microsserviços com Docker</strong></p>
            <p>Demonstração de Load Balancing, Containerização e Alta Disponibilidade</p>
            <p>Recarregue a página para ver requisições sendo distribuídas entre diferentes containers!</p>
        </div>
"#;

/// Render the whole page for one request.
pub fn render_page(report: &PageReport) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(HEAD);
    out.push_str("    <style>\n");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    out.push_str("        <h1>🐳 Microsserviços com Docker</h1>\n");
    out.push_str("        <h2>A História de Toshiro Shibakita</h2>\n");

    push_host_panel(&mut out, report);
    if let Some(conn) = &report.connection {
        push_connection_panel(&mut out, conn);
    }
    if let Some(record) = &report.inserted {
        push_inserted_panel(&mut out, record);
    }
    match &report.failure {
        Some(failure) => push_failure_panel(&mut out, failure),
        None => out.push_str(&record_tables(&report.latest, &report.totals)),
    }

    out.push_str(FOOTER);
    out.push_str("    </div>\n</body>\n</html>\n");
    out
}

/// The "latest records" and per-container tables. Empty input renders nothing.
pub fn record_tables(latest: &[Record], totals: &[HostTotal]) -> String {
    let mut out = String::new();

    if !latest.is_empty() {
        out.push_str("<h3>📋 Últimos 10 Registros</h3>\n<table>\n");
        out.push_str(
            "<tr><th>ID</th><th>Nome</th><th>Sobrenome</th><th>Cidade</th><th>Container</th></tr>\n",
        );
        for r in latest {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><strong>{}</strong></td></tr>\n",
                r.id,
                escape_html(&r.name),
                escape_html(&r.surname),
                escape_html(&r.city),
                escape_html(&r.host),
            ));
        }
        out.push_str("</table>\n");
    }

    if !totals.is_empty() {
        out.push_str("<h3>📈 Estatísticas por Container</h3>\n<table>\n");
        out.push_str("<tr><th>Container</th><th>Total de Registros</th></tr>\n");
        for t in totals {
            out.push_str(&format!(
                "<tr><td><strong>{}</strong></td><td>{}</td></tr>\n",
                escape_html(&t.host),
                t.total,
            ));
        }
        out.push_str("</table>\n");
    }

    out
}

fn push_host_panel(out: &mut String, report: &PageReport) {
    let info = &report.info;
    out.push_str("<div class=\"info-box\">\n<h3>📊 Informações do Container</h3>\n");
    push_field(out, "Hostname", &info.hostname);
    push_field(out, "IP do Servidor", &info.server_ip);
    push_field(out, "IP do Cliente", &info.client_ip);
    push_field(out, "Versão do Runtime", &info.runtime);
    push_field(out, "Timestamp", &info.timestamp);
    out.push_str("</div>\n");
}

fn push_connection_panel(out: &mut String, conn: &ConnectionSummary) {
    out.push_str("<div class=\"info-box success\">\n<h3>✅ Conexão com MySQL</h3>\n");
    out.push_str("<strong>Status:</strong> Conectado com sucesso!<br>\n");
    push_field(out, "Host", &conn.host);
    push_field(out, "Database", &conn.database);
    push_field(out, "Versão do MySQL", &conn.server_version);
    out.push_str("</div>\n");
}

fn push_inserted_panel(out: &mut String, record: &Record) {
    out.push_str("<div class=\"info-box success\">\n<h3>✅ Registro Inserido</h3>\n");
    push_field(out, "AlunoID", &record.id.to_string());
    push_field(out, "Nome", &record.name);
    push_field(out, "Sobrenome", &record.surname);
    push_field(out, "Cidade", &record.city);
    push_field(out, "Container", &record.host);
    out.push_str("</div>\n");
}

fn push_failure_panel(out: &mut String, failure: &Failure) {
    out.push_str("<div class=\"info-box error\">\n<h3>❌ Erro de Conexão</h3>\n");
    push_field(out, "Mensagem", &failure.message);
    push_field(out, "Host tentado", &failure.host);
    out.push_str("</div>\n");
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "<strong>{label}:</strong> {}<br>\n",
        escape_html(value)
    ));
}
